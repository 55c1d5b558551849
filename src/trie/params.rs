use std::fmt::{self, Debug};
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters captured during a match.
///
/// Values are byte-exact copies of the path segments that produced them,
/// minus any stripped suffix.
#[derive(Default)]
pub struct Params {
    buf: SmallVec<[(Box<str>, Box<str>); 4]>,
}

impl Params {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn push(&mut self, name: &str, value: &str) {
        self.buf.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if name == &**k { Some(&**v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, &**v))
    }
}

impl Deref for Params {
    type Target = [(Box<str>, Box<str>)];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buf.iter().map(|(k, v)| (&**k, &**v)))
            .finish()
    }
}
