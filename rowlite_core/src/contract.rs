//! The common table contract: well-known column names shared by tables
//! across a database.

/// The default row id value when a row has no id data.
pub const NO_ID: i64 = -1;

/// The implicit unique row id column (integer).
pub const COLUMN_ID: &str = "_id";

/// The unique global id for a row in a table that syncs with a server.
pub const COLUMN_GLOBAL_ID: &str = "_id_global";

/// The localisation of a row object.
pub const COLUMN_LOCALE: &str = "locale";

/// The location of a row object in WGS84 format, for example
/// `50.083698,45.407367`.
pub const COLUMN_LOCATION: &str = "location";

/// The web link to a row object.
pub const COLUMN_WEB: &str = "web";

/// The Wikipedia link to a row object.
pub const COLUMN_WIKI: &str = "wiki";

/// The stock keeping unit of a row object.
pub const COLUMN_SKU: &str = "sku";

/// Direct links to a row object on popular map services.
pub mod map_columns {
    pub const COLUMN_MAP_GOOGLE: &str = "google";
    pub const COLUMN_MAP_MAPSME: &str = "mapsme";
    pub const COLUMN_MAP_MAPYCZ: &str = "mapycz";
    pub const COLUMN_MAP_YANDEX: &str = "yandex";
}

/// The reference table describing the locales a database supports.
pub mod locale_table {
    /// The name of this table.
    pub const TABLE_NAME: &str = "locale";

    /// The locale code containing language and country/region, for example
    /// `ru_RU`, `en_US`, `cs_CZ`.
    pub const COLUMN_CODE: &str = "code";

    /// The locale name in its own language.
    pub const COLUMN_NAME: &str = "name";

    /// The "enabled for the user" flag, `1` by default.
    pub const COLUMN_ENABLED: &str = "enabled";

    /// The columns of this table, in schema order.
    pub const COLUMNS: [&str; 3] = [COLUMN_CODE, COLUMN_NAME, COLUMN_ENABLED];
}
