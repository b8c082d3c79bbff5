// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure basics.
//!
//! Drive one disclosure (target, trigger, close button) through a few
//! interactions and print the decorated elements after each re-render.
//!
//! Run:
//! - `cargo run -p understory_disclosure_demos --example disclosure_basics`

use ui_events::keyboard::{Key, NamedKey};
use understory_disclosure::{
    ClickEvent, CloseButton, Disclosure, DisclosureConfig, Element, KeyEvent, StyleMap, Target,
    TargetOptions, Trigger, TriggerOptions,
};
use understory_disclosure_demos::{ConsoleHost, NodeId};

fn main() {
    let disclosure = Disclosure::new(DisclosureConfig::new().id("shipping-details"));
    disclosure.on_change(|open| println!("  change -> {}", if open { "open" } else { "closed" }));

    let mut target = Target::<NodeId>::new(
        disclosure.clone(),
        TargetOptions::new()
            .open_class("panel--open")
            .closed_style(StyleMap::new().with("display", "none"))
            .prevent_scroll(true),
    );
    let mut trigger = Trigger::<NodeId>::new(
        disclosure.clone(),
        TriggerOptions::new().open_class("chevron--up").closed_class("chevron--down"),
    );
    let close = CloseButton::new(disclosure.clone());

    let mut host = ConsoleHost::new();
    let content = || Element::<NodeId>::new("section").with_class("panel");
    let toggle = || Element::<NodeId>::new("span").with_class("chevron");
    let dismiss = || Element::<NodeId>::new("a").with_attribute("href", "#");

    println!("== initial");
    let mut button = trigger.render(toggle());
    let mut panel = target.render(content());
    let mut closer = close.render(dismiss());
    host.commit("trigger", &button);
    host.commit("target", &panel);
    host.commit("close", &closer);

    let steps = [
        ("click trigger", Step::ClickTrigger),
        ("press Escape in target", Step::Escape),
        ("Enter on trigger, then close button", Step::EnterThenClose),
    ];

    for (title, step) in steps {
        println!("== {title}");
        match step {
            Step::ClickTrigger => button.element.click(&mut ClickEvent::pointer()),
            Step::Escape => {
                let escape = Key::Named(NamedKey::Escape);
                panel.element.key_down(&mut KeyEvent::down(escape));
            }
            Step::EnterThenClose => {
                // A `span` has no native activation; the trigger emulates it.
                button.element.key_down(&mut KeyEvent::down(Key::Named(NamedKey::Enter)));
                closer.element.click(&mut ClickEvent::pointer());
            }
        }

        button = trigger.render(toggle());
        panel = target.render(content());
        closer = close.render(dismiss());
        host.commit("trigger", &button);
        host.commit("target", &panel);
        host.commit("close", &closer);
    }

    println!("last focused node: {:?}", host.focused());
}

#[derive(Copy, Clone, Debug)]
enum Step {
    ClickTrigger,
    Escape,
    EnterThenClose,
}
