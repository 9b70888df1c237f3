//! CLI command implementations.

pub(crate) mod convert_directory;
pub(crate) mod convert_file;

pub(crate) use convert_directory::ConvertDirectoryArgs;
pub(crate) use convert_file::ConvertFileArgs;
