use crate::builder;
use crate::error::{OrderError, Result};
use crate::fulfill::{self, FulfillOutcome};
use crate::order::Order;
use crate::prompt::{InputError, Prompter};
use crate::report::{self, ReportMode};
use crate::store::OrderStore;
use std::io::{BufRead, Write};

// ---------------------------------------------------------------------------
// MenuChoice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Report,
    Fulfill,
    Exit,
}

impl MenuChoice {
    /// Blank input means exit.
    pub fn parse(input: &str) -> std::result::Result<Self, InputError> {
        match input.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Report),
            "3" => Ok(MenuChoice::Fulfill),
            "4" | "" => Ok(MenuChoice::Exit),
            _ => Err(InputError::InvalidMenuChoice),
        }
    }
}

const MENU: &[&str] = &[
    "*************** Menu ***************",
    "1. Add order",
    "2. Show order report",
    "3. Fulfill order",
    "4. Exit",
    "************************************",
];

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One operator session over a pending and a completed store.
///
/// Pending orders live in memory and are written back after every add or
/// fulfill; the completed store is only touched by fulfillment.
pub struct Session<P, C> {
    pending_store: P,
    completed_store: C,
    pending: Vec<Order>,
}

impl<P: OrderStore, C: OrderStore> Session<P, C> {
    pub fn open(pending_store: P, completed_store: C) -> Result<Self> {
        let pending = pending_store.load()?;
        Ok(Self {
            pending_store,
            completed_store,
            pending,
        })
    }

    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    /// Drive the menu until the operator exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        loop {
            match self.step(p) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(OrderError::InputClosed) => {
                    tracing::debug!("input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu and handle one choice. Returns `false` on exit.
    fn step<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<bool> {
        for line in MENU {
            p.say(line)?;
        }
        let answer = p.ask("Choose an option (Enter to exit): ")?;
        let choice = match MenuChoice::parse(&answer) {
            Ok(choice) => choice,
            Err(e) => {
                p.notice(&e)?;
                return Ok(true);
            }
        };

        match choice {
            MenuChoice::Add => {
                let outcome = builder::build_order(p, &mut self.pending)?;
                p.notice(&outcome)?;
                self.pending_store.save(&self.pending)?;
            }
            MenuChoice::Report => {
                p.say(&report::render(&self.pending, ReportMode::Batch))?;
            }
            MenuChoice::Fulfill => {
                let outcome = fulfill::fulfill(p, &mut self.pending, &self.completed_store)?;
                p.notice(&outcome)?;
                if let FulfillOutcome::Fulfilled(order) = &outcome {
                    p.say("")?;
                    p.say(&report::banner("Fulfilled Order"))?;
                    p.say(&report::render(std::slice::from_ref(order), ReportMode::Single))?;
                }
                self.pending_store.save(&self.pending)?;
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }
}
