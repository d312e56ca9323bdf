use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The option `{}` appears more than once in the list.", .0)]
    DuplicateOption(String),

    #[error("Cannot select from an empty option list.")]
    EmptyOptions,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("The selected label `{}` does not map back to an enum variant.", .0)]
    UnknownVariant(String),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing {} file at `{}`: {}", .file_description, .path, .original)]
    Yaml {
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            file_description,
            path,
            original,
        }
    }
}
