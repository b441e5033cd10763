// SPDX-License-Identifier: MPL-2.0
//! Solar savings calculator panel.
//!
//! The slider picks a monthly electricity bill from a fixed set of marks;
//! every committed mark re-queries the backend for a quote. The returned
//! quote carries the recommended system-size index, which the prev/next
//! controls then adjust, re-querying with the selected index. One integer
//! both re-queries savings and selects the displayed kWp label.
//!
//! Responses carry the sequence number of the request that produced them;
//! anything older than the latest issued request is discarded, so a slow
//! quote can never overwrite a newer one.

mod view;

pub use view::{view, ViewContext};

use crate::api::{SavingsClient, SavingsQuote};
use crate::error::ApiError;
use iced::Task;

/// Slider marks: RM 200 to RM 500 in RM 25 steps.
pub const BILL_MIN: u32 = 200;
pub const BILL_MAX: u32 = 500;
pub const BILL_STEP: u32 = 25;

/// Selectable system sizes in kWp; the quote's index points into this.
pub const SYSTEM_SIZES_KWP: [f64; 7] = [4.55, 5.20, 5.85, 6.50, 7.15, 7.80, 8.45];

/// Which endpoint produced a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// Bill changed: the quote seeds the recommended system size.
    Init,
    /// System size stepped: the quote refreshes the amounts only; the
    /// user's selection stays put.
    Update,
}

/// Messages for the calculator panel.
#[derive(Debug, Clone)]
pub enum Message {
    BillChanged(u32),
    PreviousSize,
    NextSize,
    Retry,
    QuoteFetched {
        seq: u64,
        kind: QuoteKind,
        result: Result<SavingsQuote, ApiError>,
    },
}

/// Calculator panel state.
#[derive(Debug, Clone)]
pub struct State {
    client: SavingsClient,
    bill: u32,
    most_saving: f64,
    min_bill: f64,
    system_size_index: usize,
    /// Sequence number of the latest issued request.
    request_seq: u64,
    in_flight: bool,
    error: Option<ApiError>,
}

impl State {
    /// Creates the panel against a backend client.
    #[must_use]
    pub fn new(client: SavingsClient) -> Self {
        Self {
            client,
            bill: BILL_MIN,
            most_saving: 0.0,
            min_bill: 0.0,
            system_size_index: 0,
            request_seq: 0,
            in_flight: false,
            error: None,
        }
    }

    /// Issues the first quote request; called once at startup.
    pub fn boot(&mut self) -> Task<Message> {
        self.fetch(QuoteKind::Init)
    }

    /// Currently selected bill mark.
    #[must_use]
    pub fn bill(&self) -> u32 {
        self.bill
    }

    /// Latest quoted monthly saving.
    #[must_use]
    pub fn most_saving(&self) -> f64 {
        self.most_saving
    }

    /// Latest quoted new monthly bill.
    #[must_use]
    pub fn min_bill(&self) -> f64 {
        self.min_bill
    }

    /// Selected system-size index into [`SYSTEM_SIZES_KWP`].
    #[must_use]
    pub fn system_size_index(&self) -> usize {
        self.system_size_index
    }

    /// Selected system size in kWp.
    #[must_use]
    pub fn system_size_kwp(&self) -> f64 {
        SYSTEM_SIZES_KWP[self.system_size_index]
    }

    /// Whether a quote request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// The last request failure, if the latest request failed.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Processes one message, possibly issuing a backend request.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BillChanged(value) => {
                let snapped = snap_to_mark(value);
                if snapped == self.bill {
                    return Task::none();
                }
                self.bill = snapped;
                self.fetch(QuoteKind::Init)
            }
            Message::PreviousSize => {
                if self.system_size_index == 0 {
                    return Task::none();
                }
                self.system_size_index -= 1;
                self.fetch(QuoteKind::Update)
            }
            Message::NextSize => {
                if self.system_size_index + 1 >= SYSTEM_SIZES_KWP.len() {
                    return Task::none();
                }
                self.system_size_index += 1;
                self.fetch(QuoteKind::Update)
            }
            Message::Retry => self.fetch(QuoteKind::Init),
            Message::QuoteFetched { seq, kind, result } => {
                if seq != self.request_seq {
                    // Stale response from an outrun request.
                    return Task::none();
                }
                self.in_flight = false;
                match result {
                    Ok(quote) => {
                        self.error = None;
                        self.apply(kind, quote);
                    }
                    Err(error) => self.error = Some(error),
                }
                Task::none()
            }
        }
    }

    fn apply(&mut self, kind: QuoteKind, quote: SavingsQuote) {
        self.most_saving = quote.max_saving;
        self.min_bill = quote.min_bill;
        if kind == QuoteKind::Init {
            self.system_size_index = quote.max_index.min(SYSTEM_SIZES_KWP.len() - 1);
        }
    }

    fn fetch(&mut self, kind: QuoteKind) -> Task<Message> {
        self.request_seq += 1;
        self.in_flight = true;
        self.error = None;

        let seq = self.request_seq;
        let client = self.client.clone();
        let bill = self.bill;
        let index = self.system_size_index;

        Task::perform(
            async move {
                match kind {
                    QuoteKind::Init => client.init(bill).await,
                    QuoteKind::Update => client.update(bill, index).await,
                }
            },
            move |result| Message::QuoteFetched { seq, kind, result },
        )
    }
}

/// Formats a currency amount: whole numbers without decimals, fractional
/// amounts with two.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Snaps an arbitrary slider value to the nearest bill mark.
#[must_use]
fn snap_to_mark(value: u32) -> u32 {
    let clamped = value.clamp(BILL_MIN, BILL_MAX);
    let offset = clamped - BILL_MIN;
    let rounded = (offset + BILL_STEP / 2) / BILL_STEP * BILL_STEP;
    BILL_MIN + rounded.min(BILL_MAX - BILL_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> State {
        State::new(SavingsClient::new("http://localhost:3000".to_string()))
    }

    fn quote(max_saving: f64, min_bill: f64, max_index: usize) -> SavingsQuote {
        SavingsQuote {
            max_saving,
            min_bill,
            max_index,
        }
    }

    #[test]
    fn format_amount_drops_trailing_zero_decimals() {
        assert_eq!(format_amount(180.0), "180");
        assert_eq!(format_amount(184.5), "184.50");
    }

    #[test]
    fn snap_to_mark_rounds_to_the_grid() {
        assert_eq!(snap_to_mark(200), 200);
        assert_eq!(snap_to_mark(212), 200);
        assert_eq!(snap_to_mark(213), 225);
        assert_eq!(snap_to_mark(499), 500);
        assert_eq!(snap_to_mark(9999), 500);
        assert_eq!(snap_to_mark(0), 200);
    }

    #[test]
    fn bill_change_issues_a_request() {
        let mut panel = panel();
        let _task = panel.update(Message::BillChanged(275));

        assert_eq!(panel.bill(), 275);
        assert!(panel.is_loading());
    }

    #[test]
    fn unchanged_bill_does_not_refetch() {
        let mut panel = panel();
        let _ = panel.update(Message::BillChanged(275));
        let seq_after_first = panel.request_seq;

        let _ = panel.update(Message::BillChanged(275));
        assert_eq!(panel.request_seq, seq_after_first);
    }

    #[test]
    fn init_quote_seeds_the_system_size() {
        let mut panel = panel();
        let _ = panel.update(Message::BillChanged(300));

        let _ = panel.update(Message::QuoteFetched {
            seq: panel.request_seq,
            kind: QuoteKind::Init,
            result: Ok(quote(180.0, 120.0, 4)),
        });

        assert_eq!(panel.most_saving(), 180.0);
        assert_eq!(panel.min_bill(), 120.0);
        assert_eq!(panel.system_size_index(), 4);
        assert!(!panel.is_loading());
        assert!(panel.error().is_none());
    }

    #[test]
    fn init_quote_clamps_an_out_of_range_index() {
        let mut panel = panel();
        let _ = panel.update(Message::BillChanged(300));

        let _ = panel.update(Message::QuoteFetched {
            seq: panel.request_seq,
            kind: QuoteKind::Init,
            result: Ok(quote(180.0, 120.0, 99)),
        });

        assert_eq!(panel.system_size_index(), SYSTEM_SIZES_KWP.len() - 1);
    }

    #[test]
    fn update_quote_keeps_the_user_selection() {
        let mut panel = panel();
        let _ = panel.update(Message::BillChanged(300));
        let _ = panel.update(Message::QuoteFetched {
            seq: panel.request_seq,
            kind: QuoteKind::Init,
            result: Ok(quote(180.0, 120.0, 3)),
        });

        let _ = panel.update(Message::NextSize);
        assert_eq!(panel.system_size_index(), 4);

        let _ = panel.update(Message::QuoteFetched {
            seq: panel.request_seq,
            kind: QuoteKind::Update,
            result: Ok(quote(150.0, 150.0, 2)),
        });

        assert_eq!(panel.most_saving(), 150.0);
        assert_eq!(panel.system_size_index(), 4);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut panel = panel();
        let _ = panel.update(Message::BillChanged(250));
        let stale_seq = panel.request_seq;
        let _ = panel.update(Message::BillChanged(400));

        let _ = panel.update(Message::QuoteFetched {
            seq: stale_seq,
            kind: QuoteKind::Init,
            result: Ok(quote(999.0, 999.0, 6)),
        });

        // The outrun quote left no trace; the newer request is still
        // outstanding.
        assert_eq!(panel.most_saving(), 0.0);
        assert!(panel.is_loading());
    }

    #[test]
    fn size_stepping_clamps_at_both_ends() {
        let mut panel = panel();
        assert_eq!(panel.system_size_index(), 0);

        let _ = panel.update(Message::PreviousSize);
        assert_eq!(panel.system_size_index(), 0);
        assert!(!panel.is_loading());

        for _ in 0..10 {
            let _ = panel.update(Message::NextSize);
            let seq = panel.request_seq;
            let _ = panel.update(Message::QuoteFetched {
                seq,
                kind: QuoteKind::Update,
                result: Ok(quote(1.0, 1.0, 0)),
            });
        }
        assert_eq!(panel.system_size_index(), SYSTEM_SIZES_KWP.len() - 1);
    }

    #[test]
    fn failures_surface_as_a_recoverable_error() {
        let mut panel = panel();
        let _ = panel.update(Message::BillChanged(300));

        let _ = panel.update(Message::QuoteFetched {
            seq: panel.request_seq,
            kind: QuoteKind::Init,
            result: Err(ApiError::Connect),
        });

        assert_eq!(panel.error(), Some(&ApiError::Connect));
        assert!(!panel.is_loading());

        // Retry clears the error and issues a fresh request.
        let _ = panel.update(Message::Retry);
        assert!(panel.error().is_none());
        assert!(panel.is_loading());
    }
}
