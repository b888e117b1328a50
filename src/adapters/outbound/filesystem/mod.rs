/// Filesystem adapters for file I/O operations
mod catalog_file_reader;

pub use catalog_file_reader::YamlCatalogReader;
