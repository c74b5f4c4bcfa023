mod buffer_size;

pub use self::buffer_size::{BufferSize, BufferSizeError, BufferSizeParseError};
