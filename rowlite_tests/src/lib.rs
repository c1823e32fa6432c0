#[cfg(test)]
mod list_test;
#[cfg(test)]
mod storage_test;
