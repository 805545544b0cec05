// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! src/core/types.rs
//!
//! Core type definitions for the signup/login forms
//!
//! - `FormVisibility`: which of the two forms is currently shown
//! - `SignupInput`: fields captured from the signup form at submit time
//! - `LoginInput`: fields captured from the login form at submit time
//!
//! The `Display` impls produce the exact lines written to stdout on submit.

use std::fmt;

/// Which form is visible
///
/// Exactly one of the two forms is shown at any time. The value is the
/// single source of truth for both toggle buttons and both form containers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FormVisibility {
    /// Signup form shown, signup toggle selected
    #[default]
    ShowingSignup,
    /// Login form shown, login toggle selected
    ShowingLogin,
}

impl FormVisibility {
    /// Returns true when the signup form (and its toggle) should be active
    pub fn signup_visible(self) -> bool {
        self == FormVisibility::ShowingSignup
    }

    /// Returns true when the login form (and its toggle) should be active
    pub fn login_visible(self) -> bool {
        self == FormVisibility::ShowingLogin
    }

    /// Returns the other state
    pub fn opposite(self) -> Self {
        match self {
            FormVisibility::ShowingSignup => FormVisibility::ShowingLogin,
            FormVisibility::ShowingLogin => FormVisibility::ShowingSignup,
        }
    }
}

impl fmt::Display for FormVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormVisibility::ShowingSignup => write!(f, "signup"),
            FormVisibility::ShowingLogin => write!(f, "login"),
        }
    }
}

/// Values read from the signup form
///
/// No validation is applied; empty strings are kept as-is.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignupInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupInput {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Display for SignupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signup: {}, {}, {}", self.full_name, self.email, self.password)
    }
}

/// Values read from the login form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Display for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Login: {}, {}", self.email, self.password)
    }
}
