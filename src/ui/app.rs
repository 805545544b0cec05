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


//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Loads stylesheet (before the main loop)
//!   ├─ Builds widget tree
//!   ├─ Creates Controller with the view
//!   └─ Wires handlers and actions to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AppConfig, ResourceError};
use crate::ui::{actions, builders, Controller};

/// GTK4 Application for the signup/login window
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Window settings
    config: Rc<AppConfig>,
    /// Checked stylesheet text
    css: Rc<String>,
}

impl App {
    /// Creates a new App, loading the stylesheet up front
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Stylesheet found and well-formed
    /// * `Err(ResourceError)` - Stylesheet missing or malformed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tyche::config::AppConfig;
    /// use tyche::ui::App;
    ///
    /// let app = App::new(AppConfig::default())?;
    /// # Ok::<(), tyche::config::ResourceError>(())
    /// ```
    pub fn new(config: AppConfig) -> Result<Self, ResourceError> {
        let css = config.stylesheet.load()?;
        log::debug!("Loaded stylesheet ({} bytes)", css.len());

        let app = Application::builder()
            .application_id(config.application_id.as_str())
            .build();

        Ok(Self {
            app,
            config: Rc::new(config),
            css: Rc::new(css),
        })
    }

    /// Runs the GTK4 application
    ///
    /// Blocks until the window closes. Command-line arguments are not
    /// forwarded to GTK.
    ///
    /// # Returns
    ///
    /// * `Ok(ExitCode)` - Main loop finished
    /// * `Err(ResourceError)` - Startup aborted before the window was shown
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use tyche::config::AppConfig;
    /// # use tyche::ui::App;
    /// let app = App::new(AppConfig::default())?;
    /// app.run()?; // Blocks until window closes
    /// # Ok::<(), tyche::config::ResourceError>(())
    /// ```
    pub fn run(self) -> Result<glib::ExitCode, ResourceError> {
        let startup_error: Rc<RefCell<Option<ResourceError>>> = Rc::new(RefCell::new(None));

        let config = self.config.clone();
        let css = self.css.clone();
        let error_slot = startup_error.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            if let Some(window) = app.active_window() {
                window.present();
                return;
            }

            if let Err(e) = Self::build_ui(app, &config, &css) {
                log::error!("Startup failed: {}", e);
                *error_slot.borrow_mut() = Some(e);
                app.quit();
            }
        });

        // Run the application (blocks until exit)
        let exit_code = self.app.run_with_args::<&str>(&[]);

        let startup_error = startup_error.borrow_mut().take();
        match startup_error {
            Some(e) => Err(e),
            None => Ok(exit_code),
        }
    }

    /// Attaches the stylesheet to the default display
    ///
    /// Parsing errors reported by GTK are collected and turned into
    /// `StylesheetMalformed`; the provider is only installed when clean.
    fn load_css(css: &str) -> Result<(), ResourceError> {
        let display = gdk::Display::default().ok_or(ResourceError::NoDisplay)?;

        let provider = CssProvider::new();
        let parse_errors: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let errors_for_signal = parse_errors.clone();
        provider.connect_parsing_error(move |_, section, error| {
            errors_for_signal
                .borrow_mut()
                .push(format!("{}: {}", section.to_str(), error));
        });

        provider.load_from_string(css);

        let errors = parse_errors.borrow();
        if !errors.is_empty() {
            return Err(ResourceError::StylesheetMalformed(errors.join("; ")));
        }

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    /// Builds the main window UI
    ///
    /// Called when the application activates. The window is only
    /// presented once the stylesheet is attached.
    fn build_ui(app: &Application, config: &AppConfig, css: &str) -> Result<(), ResourceError> {
        Self::load_css(css)?;

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.title.as_str())
            .default_width(config.default_width)
            .default_height(config.default_height)
            .build();

        let (main_vbox, auth_panel) = builders::build_main_layout();
        window.set_child(Some(&main_vbox));

        // Controller applies the initial state (signup shown) on creation
        let controller = Rc::new(Controller::new(auth_panel.clone()));

        builders::wire_up_handlers(controller.clone(), auth_panel);
        actions::setup_quit_action(app);
        actions::setup_show_form_actions(app, &window, controller);

        log::info!("Showing {} window", config.title);
        window.present();

        Ok(())
    }
}
