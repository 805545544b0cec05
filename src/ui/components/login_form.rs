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


//! Login form component

use gtk4::{prelude::*, Box as GtkBox, Button, Entry, Label, Orientation, PasswordEntry};

use crate::core::LoginInput;

/// Login form container
pub struct LoginForm {
    widget: GtkBox,
    email: Entry,
    password: PasswordEntry,
    submit_button: Button,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 8);
        widget.add_css_class("auth-form");

        let title = Label::new(Some("Welcome back"));
        title.add_css_class("form-title");
        title.set_halign(gtk4::Align::Start);
        widget.append(&title);

        let email = Entry::builder()
            .placeholder_text("Email")
            .input_purpose(gtk4::InputPurpose::Email)
            .build();
        let password = PasswordEntry::builder()
            .placeholder_text("Password")
            .show_peek_icon(true)
            .build();

        widget.append(&email);
        widget.append(&password);

        let submit_button = Button::builder().label("Log In").build();
        submit_button.add_css_class("suggested-action");
        submit_button.add_css_class("submit-button");
        widget.append(&submit_button);

        Self {
            widget,
            email,
            password,
            submit_button,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    pub fn submit_button(&self) -> &Button {
        &self.submit_button
    }

    pub fn last_field(&self) -> &PasswordEntry {
        &self.password
    }

    /// Reads the current email and password
    pub fn input(&self) -> LoginInput {
        LoginInput::new(self.email.text(), self.password.text())
    }
}
