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


//! Layout builder
//!
//! Creates the widget tree for the main window. All handles are returned
//! directly to the caller; nothing is looked up by name later.

use crate::ui::components::AuthPanel;
use gtk4::{prelude::*, Box as GtkBox, Orientation};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a padded vertical box containing the auth panel
/// (toggle pair, signup form, login form).
///
/// # Returns
///
/// Tuple of (main_vbox, auth_panel)
pub fn build_main_layout() -> (GtkBox, Rc<AuthPanel>) {
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);
    main_vbox.set_margin_top(24);
    main_vbox.set_margin_bottom(24);
    main_vbox.set_margin_start(24);
    main_vbox.set_margin_end(24);

    let auth_panel = Rc::new(AuthPanel::new());
    main_vbox.append(auth_panel.widget());

    (main_vbox, auth_panel)
}
