//! Auth panel component
//!
//! Groups the toggle pair with both forms and implements `FormView`,
//! so one `apply` call updates all four widgets together.

use gtk4::{prelude::*, Box as GtkBox, Orientation};

use crate::core::FormVisibility;
use crate::ui::components::{FormSwitcher, LoginForm, SignupForm};
use crate::ui::controller::FormView;

/// Toggle pair plus the two form containers
pub struct AuthPanel {
    widget: GtkBox,
    switcher: FormSwitcher,
    signup_form: SignupForm,
    login_form: LoginForm,
}

impl Default for AuthPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthPanel {
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 12);

        let switcher = FormSwitcher::new();
        let signup_form = SignupForm::new();
        let login_form = LoginForm::new();

        widget.append(switcher.widget());
        widget.append(signup_form.widget());
        widget.append(login_form.widget());

        Self {
            widget,
            switcher,
            signup_form,
            login_form,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    pub fn switcher(&self) -> &FormSwitcher {
        &self.switcher
    }

    pub fn signup_form(&self) -> &SignupForm {
        &self.signup_form
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }
}

impl FormView for AuthPanel {
    fn apply(&self, visibility: FormVisibility) {
        self.switcher.signup_toggle().set_active(visibility.signup_visible());
        self.switcher.login_toggle().set_active(visibility.login_visible());

        self.signup_form.widget().set_visible(visibility.signup_visible());
        self.login_form.widget().set_visible(visibility.login_visible());
    }
}
