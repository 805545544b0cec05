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


//! Tyche
//!
//! A small GTK4 window with a signup form and a login form. Submitting
//! either form writes the captured fields to stdout; nothing is stored
//! or sent anywhere.
//!
//! # Architecture
//!
//! - **`core`:** Form state (`FormVisibility`) and input records
//! - **`config`:** Window settings and stylesheet loading
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Driving the Controller without GTK
//!
//! ```
//! use std::rc::Rc;
//! use tyche::core::{FormVisibility, LoginInput};
//! use tyche::ui::controller::{Controller, FormView};
//!
//! struct Headless;
//! impl FormView for Headless {
//!     fn apply(&self, _visibility: FormVisibility) {}
//! }
//!
//! let controller = Controller::new(Rc::new(Headless));
//! controller.show(FormVisibility::ShowingLogin);
//! controller.submit_login(&LoginInput::new("bob@example.com", "hunter2"));
//! // stdout: Login: bob@example.com, hunter2
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use tyche::config::AppConfig;
//! use tyche::ui::App;
//!
//! let app = App::new(AppConfig::default())?;
//! app.run()?; // Blocks until window closes
//! # Ok::<(), tyche::config::ResourceError>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{FormVisibility, LoginInput, SignupInput};
