pub mod json_file_store;
#[cfg(test)]
pub mod memory_store;
