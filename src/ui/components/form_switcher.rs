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


//! Form switcher component
//!
//! Two linked toggle buttons choosing between the signup and login forms.

use gtk4::{prelude::*, Box as GtkBox, Orientation, ToggleButton};

/// Signup/Login toggle pair
pub struct FormSwitcher {
    /// Root widget (linked horizontal box)
    widget: GtkBox,
    signup_toggle: ToggleButton,
    login_toggle: ToggleButton,
}

impl Default for FormSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSwitcher {
    /// Creates the toggle pair
    ///
    /// Neither toggle is active yet; the Controller applies the initial
    /// state when it is constructed.
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Horizontal, 0);
        widget.add_css_class("linked");
        widget.add_css_class("form-switcher");
        widget.set_halign(gtk4::Align::Center);

        let signup_toggle = ToggleButton::builder().label("Sign Up").build();
        signup_toggle.add_css_class("form-toggle");

        let login_toggle = ToggleButton::builder().label("Log In").build();
        login_toggle.add_css_class("form-toggle");

        widget.append(&signup_toggle);
        widget.append(&login_toggle);

        Self {
            widget,
            signup_toggle,
            login_toggle,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    pub fn signup_toggle(&self) -> &ToggleButton {
        &self.signup_toggle
    }

    pub fn login_toggle(&self) -> &ToggleButton {
        &self.login_toggle
    }
}
