//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Toggle buttons -> form switching
//! - Submit buttons -> form submission
//! - Enter in the last field -> submit

use gtk4::prelude::*;
use std::rc::Rc;

use crate::core::FormVisibility;
use crate::ui::components::AuthPanel;
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
///
/// Every handler goes through the Controller, which re-applies the
/// resulting state to all four widgets at once.
pub fn wire_up_handlers(controller: Rc<Controller>, auth_panel: Rc<AuthPanel>) {
    // ============================================================================
    // Toggle handlers
    // ============================================================================
    let switcher = auth_panel.switcher();

    let controller_for_signup_toggle = controller.clone();
    switcher.signup_toggle().connect_clicked(move |_| {
        controller_for_signup_toggle.show(FormVisibility::ShowingSignup);
    });

    let controller_for_login_toggle = controller.clone();
    switcher.login_toggle().connect_clicked(move |_| {
        controller_for_login_toggle.show(FormVisibility::ShowingLogin);
    });

    // ============================================================================
    // Signup submit
    // ============================================================================
    let controller_for_signup = controller.clone();
    let panel_for_signup = auth_panel.clone();

    auth_panel.signup_form().submit_button().connect_clicked(move |_| {
        let input = panel_for_signup.signup_form().input();
        controller_for_signup.submit_signup(&input);
    });

    let signup_button = auth_panel.signup_form().submit_button().clone();
    auth_panel.signup_form().last_field().connect_activate(move |_| {
        signup_button.emit_clicked();
    });

    // ============================================================================
    // Login submit
    // ============================================================================
    let controller_for_login = controller;
    let panel_for_login = auth_panel.clone();

    auth_panel.login_form().submit_button().connect_clicked(move |_| {
        let input = panel_for_login.login_form().input();
        controller_for_login.submit_login(&input);
    });

    let login_button = auth_panel.login_form().submit_button().clone();
    auth_panel.login_form().last_field().connect_activate(move |_| {
        login_button.emit_clicked();
    });
}
