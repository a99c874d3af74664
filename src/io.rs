use std::io::{Read, Write};
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter};

/// Name used for standard input in paths and errors.
pub const STDIN_NAME: &str = "stdin";

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath (or `stdin`) facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn at(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Json,
    #[default]
    Yaml,
    Toml,
}
impl Format {
    /// Infer the format from a file extension.
    pub fn from_path(path: &str) -> IoResult<Format> {
        match path.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()).as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => {
                let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
                let error_string = format!("Unsupported filetype: {}\nSupported filetypes: {:?}", path, supported_filetypes);
                Err(IoError::at(path, IoErrorType::StringOnly(error_string)))
            },
        }
    }

    /// Resolve the format of an input, preferring an explicit choice.
    /// Standard input has no extension and falls back to the default format.
    pub fn resolve(path: &str, explicit: Option<Format>) -> IoResult<Format> {
        match explicit {
            Some(format) => Ok(format),
            None if is_stdin(path) => Ok(Format::default()),
            None => Format::from_path(path),
        }
    }
}

/// Check whether a path names standard input.
pub fn is_stdin(path: &str) -> bool {
    path == "-" || path == STDIN_NAME
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Read a file to a string with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Read a whole input to a string, where `-` or `stdin` is standard input.
pub fn read_input(path: &str) -> IoResult<String> {
    if !is_stdin(path) {
        return read_to_string(path);
    }
    let mut buffer = String::new();
    match std::io::stdin().lock().read_to_string(&mut buffer) {
        Ok(_) => Ok(buffer),
        Err(error) => Err(IoError::at(STDIN_NAME, IoErrorType::File(error))),
    }
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Parse a string in the given format.
/// `name` is only used for error reporting.
pub fn from_str<T>(name: &str, buffer: &str, format: Format) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match format {
        Format::Json => serde_json::from_str(buffer).map_err(|error| IoError::at(name, IoErrorType::SerdeJson(error))),
        Format::Yaml => serde_yaml::from_str(buffer).map_err(|error| IoError::at(name, IoErrorType::SerdeYaml(error))),
        Format::Toml => toml::from_str(buffer).map_err(|error| IoError::at(name, IoErrorType::TomlDe(error))),
    }
}

/// Serialize a value to a string in the given format.
pub fn to_string<T>(value: &T, format: Format) -> IoResult<String>
where T: Serialize
{
    match format {
        Format::Json => serde_json::to_string_pretty(value).map_err(|error| IoError{file: None, cause: IoErrorType::SerdeJson(error)}),
        Format::Yaml => serde_yaml::to_string(value).map_err(|error| IoError{file: None, cause: IoErrorType::SerdeYaml(error)}),
        Format::Toml => toml::to_string_pretty(value).map_err(|error| IoError{file: None, cause: IoErrorType::TomlSer(error)}),
    }
}

/// Read a data file (or standard input) in an explicit or inferred format.
pub fn read_data<T>(path: &str, format: Option<Format>) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    let format = Format::resolve(path, format)?;
    let name = if is_stdin(path) { STDIN_NAME } else { path };
    log::debug!("Reading {} as {}", name, format);
    from_str(name, &read_input(path)?, format)
}

/// Write a data file in the format inferred from its extension.
pub fn write_data<T>(path: &str, value: &T) -> IoResult<()>
where T: Serialize
{
    let format = Format::from_path(path)?;
    log::debug!("Writing {} as {}", path, format);
    let buffer = to_string(value, format).map_err(|error| IoError{file: Some(path.to_string()), cause: error.cause})?;
    write_to_file(path, &buffer)
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    from_str(path, &read_to_string(path)?, Format::from_path(path)?)
}
