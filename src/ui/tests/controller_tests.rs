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


//! Controller tests
//!
//! Test for the MVC Controller logic against a recording view

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::core::{FormVisibility, LoginInput, SignupInput};
use crate::ui::controller::{Controller, FormView};

/// View that remembers every state it was asked to display
#[derive(Default)]
struct RecordingView {
    applied: RefCell<Vec<FormVisibility>>,
}

impl RecordingView {
    fn last(&self) -> FormVisibility {
        *self.applied.borrow().last().expect("view was never applied")
    }

    fn apply_count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl FormView for RecordingView {
    fn apply(&self, visibility: FormVisibility) {
        self.applied.borrow_mut().push(visibility);
    }
}

/// In-memory sink shared between the test and the Controller
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that rejects every write
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Helper: Creates a Controller wired to a recording view and buffer
fn create_test_controller() -> (Controller, Rc<RecordingView>, SharedBuffer) {
    let view = Rc::new(RecordingView::default());
    let buffer = SharedBuffer::default();
    let controller = Controller::with_sink(view.clone(), Box::new(buffer.clone()));

    (controller, view, buffer)
}

#[test]
fn test_initial_state_applied_on_creation() {
    let (controller, view, _buffer) = create_test_controller();

    assert_eq!(controller.visibility(), FormVisibility::ShowingSignup);
    assert_eq!(view.apply_count(), 1, "Initial state should be applied once");
    assert_eq!(view.last(), FormVisibility::ShowingSignup);
}

#[test]
fn test_show_login() {
    let (controller, view, _buffer) = create_test_controller();

    assert!(controller.show(FormVisibility::ShowingLogin));
    assert_eq!(controller.visibility(), FormVisibility::ShowingLogin);
    assert_eq!(view.last(), FormVisibility::ShowingLogin);
}

#[test]
fn test_show_login_twice_is_idempotent() {
    let (controller, view, _buffer) = create_test_controller();

    controller.show(FormVisibility::ShowingLogin);
    let changed = controller.show(FormVisibility::ShowingLogin);

    assert!(!changed, "Second activation should not change state");
    assert_eq!(controller.visibility(), FormVisibility::ShowingLogin);
    assert_eq!(view.last(), FormVisibility::ShowingLogin);
}

#[test]
fn test_show_signup_restores_initial_state() {
    let (controller, view, _buffer) = create_test_controller();
    let initial = view.last();

    controller.show(FormVisibility::ShowingLogin);
    assert!(controller.show(FormVisibility::ShowingSignup));

    assert_eq!(controller.visibility(), initial);
    assert_eq!(view.last(), initial);
}

#[test]
fn test_submit_signup_output() {
    let (controller, _view, buffer) = create_test_controller();

    controller.submit_signup(&SignupInput::new("Alice", "alice@example.com", "pw123"));

    assert_eq!(buffer.contents(), "Signup: Alice, alice@example.com, pw123\n");
}

#[test]
fn test_submit_signup_keeps_visibility() {
    let (controller, view, _buffer) = create_test_controller();
    let applied_before = view.apply_count();

    controller.submit_signup(&SignupInput::new("Alice", "alice@example.com", "pw123"));

    assert_eq!(controller.visibility(), FormVisibility::ShowingSignup);
    assert_eq!(view.apply_count(), applied_before, "Submit must not touch the view");
}

#[test]
fn test_submit_login_output() {
    let (controller, _view, buffer) = create_test_controller();
    controller.show(FormVisibility::ShowingLogin);

    controller.submit_login(&LoginInput::new("bob@example.com", "hunter2"));

    assert_eq!(buffer.contents(), "Login: bob@example.com, hunter2\n");
    assert_eq!(controller.visibility(), FormVisibility::ShowingLogin);
}

#[test]
fn test_submit_empty_fields() {
    let (controller, _view, buffer) = create_test_controller();

    controller.submit_signup(&SignupInput::default());
    controller.submit_login(&LoginInput::default());

    assert_eq!(buffer.contents(), "Signup: , , \nLogin: , \n");
}

#[test]
fn test_one_line_per_submit() {
    let (controller, _view, buffer) = create_test_controller();
    let input = LoginInput::new("bob@example.com", "hunter2");

    controller.submit_login(&input);
    controller.submit_login(&input);

    assert_eq!(buffer.contents().lines().count(), 2);
}

#[test]
fn test_broken_sink_does_not_panic() {
    let view = Rc::new(RecordingView::default());
    let controller = Controller::with_sink(view, Box::new(BrokenPipe));

    controller.submit_signup(&SignupInput::new("Alice", "alice@example.com", "pw123"));
    controller.submit_login(&LoginInput::default());

    assert_eq!(controller.visibility(), FormVisibility::ShowingSignup);
}
