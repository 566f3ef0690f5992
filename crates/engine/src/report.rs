//! Report link resolution: follow the link in the report field to its
//! message and read the approval state off that message's reactions.

use crate::config::CheckerConfig;
use crate::gateway::Gateway;
use crate::{pattern, reaction};
use log::{debug, warn};
use rankwatch_model::{Decision, Member, Message, Verdict};

/// Resolve the report field for a submitting member.
///
/// - No link-like substring at all: explicit absence, `Fail`.
/// - A link-like substring we cannot parse: `Indeterminate`.
/// - A parsable link: the linked message's reactions decide; `Pass` iff
///   they classify as `Approved`.
///
/// Network failures degrade to `Indeterminate` and are logged; nothing here
/// propagates an error to the caller.
pub async fn check_report<G: Gateway + ?Sized>(
    gateway: &G,
    member: &Member,
    field_value: &str,
    config: &CheckerConfig,
) -> Verdict {
    let Some(link) = pattern::message_link(field_value) else {
        if pattern::contains_link(field_value) {
            return Verdict::Indeterminate;
        }
        return Verdict::Fail;
    };

    // Fast path: the linked message is already in the local cache. A cache
    // lookup error is treated as a miss.
    match gateway.cached_message(&link.channel_id, &link.message_id).await {
        Ok(Some(cached)) => return decision_verdict(&cached),
        Ok(None) => {}
        Err(err) => debug!("report cache lookup failed, falling back to fetch: {err}"),
    }

    let window = match gateway
        .fetch_messages_around(
            &link.channel_id,
            &link.message_id,
            config.fetch_window,
            config.fetch_retries,
        )
        .await
    {
        Ok(window) => window,
        Err(err) => {
            warn!("report link fetch failed for message {}: {err}", link.message_id);
            return Verdict::Indeterminate;
        }
    };

    let Some(target) = window.into_iter().find(|msg| msg.id == link.message_id) else {
        return Verdict::Fail;
    };

    // A report that does not mention the submitter is a wrong or stale link.
    if !target.content.contains(&member.user_id) {
        return Verdict::Fail;
    }

    decision_verdict(&target)
}

fn decision_verdict(message: &Message) -> Verdict {
    if reaction::classify(&message.reactions) == Decision::Approved {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{member, message, MockGateway};
    use pretty_assertions::assert_eq;

    const LINK: &str = "https://discord.com/channels/100/20/3000";

    fn config() -> CheckerConfig {
        CheckerConfig::for_channel("100", "10")
    }

    #[tokio::test]
    async fn no_link_at_all_fails() {
        let gateway = MockGateway::default();
        let verdict = check_report(&gateway, &member("1000"), "отчёт в личке", &config()).await;
        assert_eq!(verdict, Verdict::Fail);
    }

    #[tokio::test]
    async fn unparsable_link_is_indeterminate() {
        let gateway = MockGateway::default();
        let verdict = check_report(
            &gateway,
            &member("1000"),
            "https://example.com/report/7",
            &config(),
        )
        .await;
        assert_eq!(verdict, Verdict::Indeterminate);
    }

    #[tokio::test]
    async fn cached_approved_report_passes() {
        let gateway = MockGateway::default();
        gateway.put_cached(message("3000", "20").reactions(&["✅"]).build());

        let verdict = check_report(&gateway, &member("1000"), LINK, &config()).await;
        assert_eq!(verdict, Verdict::Pass);
        assert_eq!(gateway.fetch_calls(), 0);
    }

    #[tokio::test]
    async fn cached_undecided_report_fails() {
        let gateway = MockGateway::default();
        gateway.put_cached(message("3000", "20").build());

        let verdict = check_report(&gateway, &member("1000"), LINK, &config()).await;
        assert_eq!(verdict, Verdict::Fail);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_indeterminate() {
        let gateway = MockGateway::default().failing_fetch();
        let verdict = check_report(&gateway, &member("1000"), LINK, &config()).await;
        assert_eq!(verdict, Verdict::Indeterminate);
    }

    #[tokio::test]
    async fn fetched_window_without_target_fails() {
        let gateway = MockGateway::default();
        gateway.put_remote(message("3001", "20").build());

        let verdict = check_report(&gateway, &member("1000"), LINK, &config()).await;
        assert_eq!(verdict, Verdict::Fail);
    }

    #[tokio::test]
    async fn fetched_report_must_mention_the_submitter() {
        let gateway = MockGateway::default();
        gateway.put_remote(
            message("3000", "20")
                .content("report by <@9999>")
                .reactions(&["✅"])
                .build(),
        );

        let verdict = check_report(&gateway, &member("1000"), LINK, &config()).await;
        assert_eq!(verdict, Verdict::Fail);
    }

    #[tokio::test]
    async fn fetched_approved_report_passes() {
        let gateway = MockGateway::default();
        gateway.put_remote(
            message("3000", "20")
                .content("report by <@1000>")
                .reactions(&["✅"])
                .build(),
        );

        let verdict = check_report(&gateway, &member("1000"), LINK, &config()).await;
        assert_eq!(verdict, Verdict::Pass);
    }
}
