// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! FAQ list with a registry.
//!
//! Several disclosures live in one scope. Triggers are wired by id through a
//! `DisclosureRegistry`, and one answer is controlled by the application so it
//! stays open no matter how often its trigger is clicked.
//!
//! Run:
//! - `cargo run -p understory_disclosure_demos --example faq_registry`

use understory_disclosure::{
    ClickEvent, Disclosure, DisclosureConfig, DisclosureRegistry, Element, Target, TargetOptions,
    Trigger, TriggerOptions,
};
use understory_disclosure_demos::{NodeId, describe};

const QUESTIONS: [&str; 3] = ["faq-returns", "faq-shipping", "faq-warranty"];

fn main() {
    let mut registry = DisclosureRegistry::new();
    for id in QUESTIONS {
        let config = DisclosureConfig::new().id(id);
        // The warranty answer is pinned open by the application.
        let config = if id == "faq-warranty" { config.open(true) } else { config };
        if let Err(err) = registry.insert(Disclosure::new(config)) {
            eprintln!("{err}");
        }
    }

    for clicks in ["faq-shipping", "faq-warranty", "faq-shipping", "faq-returns"] {
        let Some(disclosure) = registry.get(clicks) else {
            continue;
        };
        let mut trigger = Trigger::<NodeId>::new(disclosure.clone(), TriggerOptions::new());
        let mut button = trigger.render(Element::new("button"));
        button.element.click(&mut ClickEvent::pointer());
        println!("clicked {clicks}");
    }

    for id in QUESTIONS {
        let Some(disclosure) = registry.get(id) else {
            continue;
        };
        let mut target = Target::<NodeId>::new(
            disclosure.clone(),
            TargetOptions::new().open_class("answer--open"),
        );
        let rendered = target.render(Element::new("dd"));
        println!(
            "{id:>13} controlled={:<5} {}",
            disclosure.is_controlled(),
            describe(&rendered.element)
        );
    }
}
