/// Archive adapters for decompressing index archives
mod index_archive;

pub use index_archive::extract_index;
