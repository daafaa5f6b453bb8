//! Conversion from realtime wire types to the domain `Quote`.

use super::wire::RealtimeResponse;
use super::Quote;

impl From<RealtimeResponse> for Quote {
    fn from(r: RealtimeResponse) -> Self {
        // A missing prev_close means the service indicated no change.
        Self {
            current: r.current,
            previous_close: r.prev_close.unwrap_or(r.current),
        }
    }
}
