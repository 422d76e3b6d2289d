//! Async driver that runs whole rounds against a `RandomDraw`.

use pairwheel_common::PairingError;
use tracing::{debug, warn};

use crate::draw::RandomDraw;
use crate::pair::CandidatePair;

use super::{DrawOutcome, PairingSession, RoundStart};

impl PairingSession {
    /// Run one round to completion and return the committed pair.
    ///
    /// Waits out each request's delay, performs the draw, and feeds the
    /// result back until the round commits, stalls, or is aborted. A failing
    /// draw aborts the round.
    pub async fn run_round(
        &mut self,
        draw: &mut dyn RandomDraw,
    ) -> Result<CandidatePair, PairingError> {
        let mut request = match self.start_round() {
            RoundStart::Draw(request) => request,
            RoundStart::NoLegalPairs { remaining } => {
                return Err(PairingError::NoLegalPairs { remaining })
            }
            RoundStart::AlreadyActive(state) => return Err(PairingError::InvalidRoundStart(state)),
        };

        loop {
            if !request.delay.is_zero() {
                tokio::time::sleep(request.delay).await;
            }
            debug!(
                session = %self.id,
                round = %request.round,
                attempt = request.attempt,
                candidates = request.candidates.len(),
                "drawing"
            );
            let drawn = match draw.draw(&request.candidates, request.target.as_ref()).await {
                Ok(drawn) => drawn,
                Err(e) => {
                    warn!(session = %self.id, round = %request.round, "draw failed: {e}");
                    self.abort_round("draw failed");
                    return Err(PairingError::Draw(e.to_string()));
                }
            };
            match self.on_draw_result(request.round, &drawn) {
                DrawOutcome::Redraw(next) | DrawOutcome::Next(next) => request = next,
                DrawOutcome::Committed(pair) => return Ok(pair),
                DrawOutcome::Stalled { attempts } => {
                    return Err(PairingError::DrawStalled { attempts })
                }
                DrawOutcome::Stale => return Err(PairingError::RoundAborted),
            }
        }
    }

    /// Run rounds until one commits.
    ///
    /// A stalled round leaves the pool and queue as they were, so it is
    /// started again, up to `max_round_restarts` times in a row.
    pub async fn run_pair(
        &mut self,
        draw: &mut dyn RandomDraw,
    ) -> Result<CandidatePair, PairingError> {
        let mut restarts = 0;
        loop {
            match self.run_round(draw).await {
                Err(PairingError::DrawStalled { attempts })
                    if restarts < self.settings.max_round_restarts =>
                {
                    restarts += 1;
                    warn!(session = %self.id, attempts, restarts, "round stalled, starting it again");
                }
                other => return other,
            }
        }
    }

    /// Keep running rounds until no legal pair is left. Returns the pairs in
    /// the order they were committed; any other error stops the run.
    pub async fn run_until_exhausted(
        &mut self,
        draw: &mut dyn RandomDraw,
    ) -> Result<Vec<CandidatePair>, PairingError> {
        let mut pairs = Vec::new();
        loop {
            match self.run_pair(draw).await {
                Ok(pair) => pairs.push(pair),
                Err(PairingError::NoLegalPairs { .. }) => return Ok(pairs),
                Err(e) => return Err(e),
            }
        }
    }
}
