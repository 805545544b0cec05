//! MVC Controller - Mediates between the form state and the GTK4 view
//!
//! # Responsibilities
//!
//! - Own the single `FormVisibility` value
//! - Push every visibility change to the view in one call
//! - Write submitted form values to the output sink
//!
//! # Architecture
//!
//! The Controller doesn't know about GTK4 widgets. The view implements
//! `FormView` and is handed to the Controller at construction, so the
//! same logic runs against a recording view in tests.

use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::io::{self, Write};
use std::rc::Rc;

use crate::core::{FormVisibility, LoginInput, SignupInput};

/// Anything that can display a `FormVisibility`
///
/// `apply` must update both toggles and both form containers together.
pub trait FormView {
    fn apply(&self, visibility: FormVisibility);
}

/// MVC Controller for the signup/login window
pub struct Controller {
    /// View receiving visibility updates
    view: Rc<dyn FormView>,
    /// Currently shown form
    visibility: Cell<FormVisibility>,
    /// Where submitted values are written (stdout in the app)
    sink: RefCell<Box<dyn Write>>,
}

impl Controller {
    /// Creates a Controller that writes submissions to stdout
    ///
    /// The initial state (signup shown) is applied to the view immediately.
    pub fn new(view: Rc<dyn FormView>) -> Self {
        Self::with_sink(view, Box::new(io::stdout()))
    }

    /// Creates a Controller with a custom output sink
    ///
    /// # Example
    ///
    /// ```
    /// use std::rc::Rc;
    /// use tyche::core::FormVisibility;
    /// use tyche::ui::controller::{Controller, FormView};
    ///
    /// struct NoView;
    /// impl FormView for NoView {
    ///     fn apply(&self, _visibility: FormVisibility) {}
    /// }
    ///
    /// let controller = Controller::with_sink(Rc::new(NoView), Box::new(std::io::sink()));
    /// assert_eq!(controller.visibility(), FormVisibility::ShowingSignup);
    /// ```
    pub fn with_sink(view: Rc<dyn FormView>, sink: Box<dyn Write>) -> Self {
        let controller = Self {
            view,
            visibility: Cell::new(FormVisibility::default()),
            sink: RefCell::new(sink),
        };

        controller.view.apply(controller.visibility.get());
        controller
    }

    /// Returns the currently shown form
    pub fn visibility(&self) -> FormVisibility {
        self.visibility.get()
    }

    /// Switches to the given form
    ///
    /// The view is always re-applied, so activating the toggle of the
    /// form already shown leaves everything exactly as it was.
    ///
    /// # Returns
    ///
    /// `true` if the visible form changed
    pub fn show(&self, visibility: FormVisibility) -> bool {
        let changed = self.visibility.replace(visibility) != visibility;
        self.view.apply(visibility);

        if changed {
            log::debug!("Switched to {} form", visibility);
        }
        changed
    }

    /// Writes `Signup: <name>, <email>, <password>` to the sink
    ///
    /// Empty fields are accepted and printed as empty segments.
    pub fn submit_signup(&self, input: &SignupInput) {
        log::info!("Signup form submitted");
        self.emit(input);
    }

    /// Writes `Login: <email>, <password>` to the sink
    pub fn submit_login(&self, input: &LoginInput) {
        log::info!("Login form submitted");
        self.emit(input);
    }

    fn emit(&self, line: &dyn Display) {
        let mut sink = self.sink.borrow_mut();
        if let Err(e) = writeln!(sink, "{}", line).and_then(|_| sink.flush()) {
            log::warn!("Failed to write submission: {}", e);
        }
    }
}
