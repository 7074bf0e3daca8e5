//! Units command: lists the catalog for the effective plan

use crate::output::print_catalog;
use crate::{CommandStatus, Session};

pub async fn run(session: &mut Session) -> CommandStatus {
    let outcome = session.controller.maybe_refresh().await;
    tracing::debug!(?outcome, "opportunistic refresh");

    print_catalog(&session.controller.catalog());
    CommandStatus::Success
}
