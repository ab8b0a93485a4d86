use std::fmt;

macro_rules! define_errors {
    (
        $(wrap $variant:ident($ty:ty) => $label:expr),*;
        $(msg $msg_variant:ident => $msg_label:expr),*
        $(;)?
    ) => {
        /// Failures at the crate's I/O edges: config files and paginator bounds.
        #[derive(Debug)]
        pub enum MetaError {
            $($variant($ty),)*
            $($msg_variant(String),)*
        }

        impl fmt::Display for MetaError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(MetaError::$variant(err) => write!(f, "{}: {}", $label, err),)*
                    $(MetaError::$msg_variant(msg) => write!(f, "{}: {}", $msg_label, msg),)*
                }
            }
        }

        $(impl From<$ty> for MetaError {
            fn from(err: $ty) -> Self {
                MetaError::$variant(err)
            }
        })*
    };
}

define_errors! {
    wrap Io(std::io::Error)    => "Io error",
    wrap Toml(toml::de::Error) => "Toml error";
    msg Config    => "Config error",
    msg Paginator => "Paginator error"
}

impl std::error::Error for MetaError {}

pub type MetaResult<T> = std::result::Result<T, MetaError>;
