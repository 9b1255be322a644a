// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::fmt::Display;

/// The input is not a fragment identifier this crate accepts: it does not
/// start with `#`, or it starts with `#/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFragment {
    input: String,
}

impl InvalidFragment {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, exactly as it was passed in.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for InvalidFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hash parameter `{}`", self.input)
    }
}

impl std::error::Error for InvalidFragment {}

/// Shape check shared by [`crate::parse`] and [`crate::params`].
pub(crate) fn check_fragment(fragment: &str) -> Result<(), InvalidFragment> {
    let bytes = fragment.as_bytes();
    if bytes.first() != Some(&b'#') || bytes.get(1) == Some(&b'/') {
        return Err(InvalidFragment::new(fragment));
    }
    Ok(())
}
