//! GTK Action setup for the application
//!
//! - `app.quit` (Ctrl+Q)
//! - `win.show-signup` (Ctrl+1) and `win.show-login` (Ctrl+2)

use gtk4::{gio, prelude::*, Application, ApplicationWindow};
use std::rc::Rc;

use crate::core::FormVisibility;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        log::debug!("Quit requested");
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}

/// Sets up the form switching actions
///
/// Keyboard equivalents of the two toggle buttons. They go through the
/// Controller like the toggles do.
pub fn setup_show_form_actions(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
) {
    let forms = [
        ("show-signup", "<Control>1", FormVisibility::ShowingSignup),
        ("show-login", "<Control>2", FormVisibility::ShowingLogin),
    ];

    for (name, accel, visibility) in forms {
        let action = gio::SimpleAction::new(name, None);
        let controller_for_action = controller.clone();

        action.connect_activate(move |_, _| {
            controller_for_action.show(visibility);
        });

        window.add_action(&action);
        app.set_accels_for_action(&format!("win.{name}"), &[accel]);
    }
}
