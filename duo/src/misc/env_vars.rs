use std::{
  env, fs,
  io::{self, BufRead as _, BufReader, Read},
  path::{Path, PathBuf},
};

/// Allows the interactive reading of environment variables.
#[derive(Debug)]
pub struct EnvVars<T>(T);

impl<T> EnvVars<T>
where
  T: FromVars,
{
  /// Merges the nearest `.env` file, if any, with the variables of the current process. Process
  /// variables override file variables.
  #[inline]
  pub fn from_available() -> crate::Result<Self> {
    let mut vars = match nearest_env_file() {
      Ok(path) => env_pairs(fs::File::open(path)?)?,
      Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
      Err(err) => return Err(err.into()),
    };
    vars.extend(process_pairs());
    Self::from_iterator(vars)
  }

  /// Constructs `T` through the deserialization of a literal `.env` data.
  ///
  /// Intended for debugging or tests.
  #[inline]
  pub fn from_env_data(data: &[u8]) -> crate::Result<Self> {
    Self::from_iterator(env_pairs(data)?)
  }

  /// Constructs `T` through the deserialization of the passed `.env` file.
  #[inline]
  pub fn from_env_path<P>(path: P) -> crate::Result<Self>
  where
    P: AsRef<Path>,
  {
    Self::from_iterator(env_pairs(fs::File::open(path)?)?)
  }

  /// Constructs itself based on `vars`.
  #[inline]
  pub fn from_iterator(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self> {
    Ok(Self(T::from_vars(vars)?))
  }

  /// Tries to find an `.env` file starting at the current location until the root directory.
  #[inline]
  pub fn from_nearest_env_file() -> crate::Result<Self> {
    Self::from_env_path(nearest_env_file()?)
  }

  /// Constructs `T` according to all the environment variables of the current process.
  /// Variables that aren't valid unicode are skipped.
  #[inline]
  pub fn from_process() -> crate::Result<Self> {
    Self::from_iterator(process_pairs())
  }

  /// Unwraps `T`.
  #[inline]
  pub fn finish(self) -> T {
    self.0
  }
}

/// Constructs itself using a set of `(key, value)` string pairs. When a key repeats, the last
/// occurrence wins.
pub trait FromVars: Sized {
  /// See [`FromVars`].
  fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self>;
}

fn env_pairs<R>(read: R) -> crate::Result<Vec<(String, String)>>
where
  R: Read,
{
  let mut vars = Vec::new();
  for line_rslt in BufReader::new(read).lines() {
    let line = line_rslt?;
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
      continue;
    }
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let Some((key, value)) = trimmed.split_once('=') else {
      continue;
    };
    vars.push((key.trim().to_owned(), unquote(value.trim()).to_owned()));
  }
  Ok(vars)
}

fn nearest_env_file() -> io::Result<PathBuf> {
  let mut dir = env::current_dir()?;
  loop {
    let candidate = dir.join(".env");
    if fs::metadata(&candidate).is_ok_and(|el| el.is_file()) {
      return Ok(candidate);
    }
    if !dir.pop() {
      return Err(io::Error::new(io::ErrorKind::NotFound, "`.env` file not found"));
    }
  }
}

fn process_pairs() -> impl Iterator<Item = (String, String)> {
  env::vars_os()
    .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

fn unquote(value: &str) -> &str {
  for quote in ['"', '\''] {
    if let Some(elem) = value.strip_prefix(quote).and_then(|el| el.strip_suffix(quote)) {
      return elem;
    }
  }
  value
}

#[cfg(test)]
mod tests {
  use crate::misc::{env_vars::env_pairs, EnvVars, FromVars};

  #[derive(Debug)]
  struct Vars(Vec<(String, String)>);

  impl FromVars for Vars {
    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self> {
      Ok(Self(vars.into_iter().collect()))
    }
  }

  #[test]
  fn basic_env() {
    let data = "HOST='localhost'\nPORT=8080\n Comment\n# NAME=bar\nexport NAME=\"foo\"\n";
    let result = env_pairs(data.as_bytes()).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result[0], ("HOST".into(), "localhost".into()));
    assert_eq!(result[1], ("PORT".into(), "8080".into()));
    assert_eq!(result[2], ("NAME".into(), "foo".into()));
  }

  #[test]
  fn env_data_reaches_from_vars() {
    let vars = EnvVars::<Vars>::from_env_data(b"A=1\nB = 2").unwrap().finish();
    assert_eq!(vars.0, [("A".to_owned(), "1".to_owned()), ("B".to_owned(), "2".to_owned())]);
  }
}
