//! Locate the first `"destination"` field in a JSON document and derive a
//! salted MD5 digest from it.
use crate::utils::{error_chain_fmt, random_alphanumeric};
use md5::{Digest, Md5};
use rand::Rng;
use serde_json::Value;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const DESTINATION_KEY: &str = "destination";
pub const SALT_LENGTH: usize = 8;

#[derive(thiserror::Error)]
pub enum DestinationHashError {
    #[error("Usage: destination_hash <PRN Number> <path to json file>")]
    Usage,
    #[error("The PRN Number must be valid UTF-8.")]
    NonUtf8Identifier,
    #[error("Error reading JSON file {}.", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing JSON file {}.", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Key 'destination' not found in the JSON file.")]
    MissingDestination,
    #[error("Key 'destination' holds {kind}, which cannot be read as a string.")]
    UnusableDestination { kind: &'static str },
}

impl std::fmt::Debug for DestinationHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashArgs {
    pub identifier: String,
    pub path: PathBuf,
}

impl HashArgs {
    /// Parse the positional arguments, program name excluded.
    ///
    /// The identifier is trimmed and lowercased and must be valid UTF-8.
    /// The path is only trimmed and may hold any bytes the OS allows.
    pub fn parse<I, S>(args: I) -> Result<Self, DestinationHashError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [identifier, path] = args.as_slice() else {
            return Err(DestinationHashError::Usage);
        };
        let identifier = identifier
            .to_str()
            .ok_or(DestinationHashError::NonUtf8Identifier)?
            .trim()
            .to_lowercase();
        Ok(Self {
            identifier,
            path: trim_path(path),
        })
    }
}

#[cfg(unix)]
fn trim_path(path: &OsStr) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(path.as_bytes().trim_ascii()))
}

// Only UTF-8 paths can be trimmed safely off unix
#[cfg(not(unix))]
fn trim_path(path: &OsStr) -> PathBuf {
    match path.to_str() {
        Some(path) => PathBuf::from(path.trim()),
        None => PathBuf::from(path),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOutput {
    pub digest: String,
    pub salt: String,
}

impl std::fmt::Display for HashOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.digest, self.salt)
    }
}

#[tracing::instrument(
    name = "Loading JSON document",
    skip_all,
    fields(path = %path.display())
)]
pub fn load_document(path: &Path) -> Result<Value, DestinationHashError> {
    let file = File::open(path).map_err(|source| DestinationHashError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            DestinationHashError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            DestinationHashError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Depth-first, pre-order search for the first `"destination"` key.
///
/// An object's own key is checked before any of its values are descended
/// into; object values and array elements are visited in document order.
pub fn find_destination(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) => map
            .get(DESTINATION_KEY)
            .or_else(|| map.values().find_map(find_destination)),
        Value::Array(elements) => elements.iter().find_map(find_destination),
        _ => None,
    }
}

/// Render a destination value the way it is fed into the digest.
pub fn destination_as_string(value: &Value) -> Result<String, DestinationHashError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(DestinationHashError::UnusableDestination { kind: "null" }),
        Value::Array(_) => Err(DestinationHashError::UnusableDestination { kind: "an array" }),
        Value::Object(_) => Err(DestinationHashError::UnusableDestination {
            kind: "an object",
        }),
    }
}

pub fn generate_salt<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    random_alphanumeric(rng, SALT_LENGTH)
}

/// Lowercase hex MD5 of `identifier + destination + salt`, no separators.
pub fn compute_digest(identifier: &str, destination: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(identifier.as_bytes());
    hasher.update(destination.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash an already parsed document.
pub fn hash_document<R>(
    identifier: &str,
    document: &Value,
    rng: &mut R,
) -> Result<HashOutput, DestinationHashError>
where
    R: Rng + ?Sized,
{
    let destination =
        find_destination(document).ok_or(DestinationHashError::MissingDestination)?;
    let destination = destination_as_string(destination)?;
    let salt = generate_salt(rng);
    let digest = compute_digest(identifier, &destination, &salt);
    Ok(HashOutput { digest, salt })
}

#[tracing::instrument(
    name = "Hashing destination",
    skip(rng),
    fields(identifier = %args.identifier)
)]
pub fn run<R>(args: &HashArgs, rng: &mut R) -> Result<HashOutput, DestinationHashError>
where
    R: Rng + ?Sized,
{
    let document = load_document(&args.path)?;
    hash_document(&args.identifier, &document, rng)
}
