//! Service Bus namespace export importer
//!
//! Maps the `Queues/Queue` and `Topics/Topic/Subscriptions/Subscription`
//! elements of an export onto emulator entities.
//!
//! # Field rules
//!
//! Every property is read from the first direct child element carrying its
//! name. Nothing in here fails on missing or odd values:
//! - text: trimmed text, `""` when absent
//! - bool: `true` only for the exact text `True`
//! - int: leading base-10 integer, `0` when absent or unparsable
//! - duration: clock-style value clamped to the field's bounds and rendered
//!   as ISO 8601, `""` when absent or empty
//!
//! Topics without subscriptions are left out of the result.

use super::ImportError;
use super::xml::XmlElement;
use crate::duration::clock::parse_leading_int;
use crate::duration::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, normalize_duration};
use crate::models::{
    EmulatorConfig, Queue, QueueProperties, Subscription, SubscriptionProperties, Topic,
    TopicProperties,
};
use tracing::{debug, info};

/// Millisecond range a duration property is clamped into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBounds {
    pub min_ms: i64,
    pub max_ms: i64,
}

impl DurationBounds {
    /// Bounds the emulator enforces for the given property.
    ///
    /// `LockDuration` must be 1-5 minutes and `DuplicateDetectionHistoryTimeWindow`
    /// at most 5 minutes. Everything else is 1 second to 1 hour.
    pub fn for_tag(tag: &str) -> Self {
        let max_ms = match tag {
            "DuplicateDetectionHistoryTimeWindow" | "LockDuration" => 5 * MILLIS_PER_MINUTE,
            _ => MILLIS_PER_HOUR,
        };
        let min_ms = match tag {
            "LockDuration" => MILLIS_PER_MINUTE,
            _ => MILLIS_PER_SECOND,
        };
        Self { min_ms, max_ms }
    }
}

/// Importer for Service Bus namespace exports.
#[derive(Debug, Default)]
pub struct ServiceBusImporter;

impl ServiceBusImporter {
    /// Create a new importer instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use servicebus_emulator_config::import::ServiceBusImporter;
    ///
    /// let importer = ServiceBusImporter::new();
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Import an XML export into an emulator configuration.
    ///
    /// # Arguments
    ///
    /// * `xml_content` - The exported namespace as XML text
    ///
    /// # Returns
    ///
    /// The emulator configuration, or `ImportError::ParseError` when the
    /// document is not well-formed XML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use servicebus_emulator_config::import::ServiceBusImporter;
    ///
    /// let xml = r#"
    /// <Namespace>
    ///   <Queues>
    ///     <Queue><Path>orders</Path><LockDuration>00:02:00</LockDuration></Queue>
    ///   </Queues>
    /// </Namespace>
    /// "#;
    /// let config = ServiceBusImporter::new().import(xml).unwrap();
    /// let queue = &config.namespace().unwrap().queues[0];
    /// assert_eq!(queue.name, "orders");
    /// assert_eq!(queue.properties.lock_duration, "PT2M");
    /// ```
    pub fn import(&self, xml_content: &str) -> Result<EmulatorConfig, ImportError> {
        let root = XmlElement::parse(xml_content)?;

        let queues = self.find_queues(&root);
        let topics = self.find_topics(&root);

        info!(
            "Imported {} queue(s) and {} topic(s) from <{}>",
            queues.len(),
            topics.len(),
            root.name
        );

        Ok(EmulatorConfig::new(queues, topics))
    }

    /// Every `Queue` directly inside a `Queues` element, in document order.
    pub fn find_queues(&self, root: &XmlElement) -> Vec<Queue> {
        root.select_children_of("Queues", "Queue")
            .into_iter()
            .map(|queue| {
                let name = get_text(queue, "Path");
                debug!("Mapping queue '{}'", name);
                Queue {
                    name,
                    properties: self.queue_properties(queue),
                }
            })
            .collect()
    }

    /// Every `Topic` directly inside a `Topics` element that has at least one
    /// subscription, in document order.
    pub fn find_topics(&self, root: &XmlElement) -> Vec<Topic> {
        let mut topics = Vec::new();

        for topic in root.select_children_of("Topics", "Topic") {
            let name = get_text(topic, "Path");
            let subscriptions: Vec<Subscription> = topic
                .select_children_of("Subscriptions", "Subscription")
                .into_iter()
                .map(|sub| Subscription {
                    name: get_text(sub, "Name"),
                    properties: self.subscription_properties(sub),
                    rules: Vec::new(),
                })
                .collect();

            if subscriptions.is_empty() {
                debug!("Skipping topic '{}': no subscriptions", name);
                continue;
            }

            debug!(
                "Mapping topic '{}' with {} subscription(s)",
                name,
                subscriptions.len()
            );
            topics.push(Topic {
                name,
                properties: self.topic_properties(topic),
                subscriptions,
            });
        }

        topics
    }

    fn queue_properties(&self, queue: &XmlElement) -> QueueProperties {
        QueueProperties {
            lock_duration: get_duration(queue, "LockDuration"),
            requires_duplicate_detection: get_bool(queue, "RequiresDuplicateDetection"),
            requires_session: get_bool(queue, "RequiresSession"),
            default_message_time_to_live: get_duration(queue, "DefaultMessageTimeToLive"),
            dead_lettering_on_message_expiration: get_bool(
                queue,
                "EnableDeadLetteringOnMessageExpiration",
            ),
            duplicate_detection_history_time_window: get_duration(
                queue,
                "DuplicateDetectionHistoryTimeWindow",
            ),
            max_delivery_count: get_int(queue, "MaxDeliveryCount"),
            forward_to: get_text(queue, "ForwardTo"),
            forward_dead_lettered_messages_to: get_text(queue, "ForwardDeadLetteredMessagesTo"),
        }
    }

    fn topic_properties(&self, topic: &XmlElement) -> TopicProperties {
        TopicProperties {
            default_message_time_to_live: get_duration(topic, "DefaultMessageTimeToLive"),
            duplicate_detection_history_time_window: get_duration(
                topic,
                "DuplicateDetectionHistoryTimeWindow",
            ),
            auto_delete_on_idle: get_duration(topic, "AutoDeleteOnIdle"),
            max_size_in_megabytes: get_int(topic, "MaxSizeInMegabytes"),
            requires_duplicate_detection: get_bool(topic, "RequiresDuplicateDetection"),
            enable_batched_operations: get_bool(topic, "EnableBatchedOperations"),
            support_ordering: get_bool(topic, "SupportOrdering"),
            enable_filtering_messages_before_publishing: get_bool(
                topic,
                "EnableFilteringMessagesBeforePublishing",
            ),
            is_anonymous_accessible: get_bool(topic, "IsAnonymousAccessible"),
            status: get_text(topic, "Status"),
            user_metadata: get_text(topic, "UserMetadata"),
            enable_partitioning: get_bool(topic, "EnablePartitioning"),
            enable_express: get_bool(topic, "EnableExpress"),
            is_read_only: get_bool(topic, "IsReadOnly"),
        }
    }

    fn subscription_properties(&self, sub: &XmlElement) -> SubscriptionProperties {
        SubscriptionProperties {
            lock_duration: get_duration(sub, "LockDuration"),
            requires_session: get_bool(sub, "RequiresSession"),
            default_message_time_to_live: get_duration(sub, "DefaultMessageTimeToLive"),
            dead_lettering_on_message_expiration: get_bool(
                sub,
                "EnableDeadLetteringOnMessageExpiration",
            ),
            max_delivery_count: get_int(sub, "MaxDeliveryCount"),
            forward_to: get_text(sub, "ForwardTo"),
            forward_dead_lettered_messages_to: get_text(sub, "ForwardDeadLetteredMessagesTo"),
        }
    }
}

/// Trimmed text of the `tag` child, or `""` when absent.
pub fn get_text(element: &XmlElement, tag: &str) -> String {
    element
        .child(tag)
        .map(|child| child.text_content().trim().to_string())
        .unwrap_or_default()
}

/// `true` only when the `tag` child's text is exactly `True`.
pub fn get_bool(element: &XmlElement, tag: &str) -> bool {
    element
        .child(tag)
        .is_some_and(|child| child.text_content() == "True")
}

/// Leading integer of the `tag` child's text, or 0.
pub fn get_int(element: &XmlElement, tag: &str) -> i64 {
    element
        .child(tag)
        .map(|child| parse_leading_int(&child.text_content()))
        .unwrap_or(0)
}

/// Canonical ISO 8601 value of a clock-style `tag` child, clamped to the
/// bounds for `tag`; `""` when the child is absent or empty.
pub fn get_duration(element: &XmlElement, tag: &str) -> String {
    let value = element
        .child(tag)
        .map(XmlElement::text_content)
        .unwrap_or_default();
    if value.is_empty() {
        return String::new();
    }

    let bounds = DurationBounds::for_tag(tag);
    normalize_duration(&value, bounds.max_ms, bounds.min_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> XmlElement {
        XmlElement::parse(xml).unwrap()
    }

    #[test]
    fn test_bounds_per_tag() {
        assert_eq!(
            DurationBounds::for_tag("LockDuration"),
            DurationBounds {
                min_ms: 60_000,
                max_ms: 300_000
            }
        );
        assert_eq!(
            DurationBounds::for_tag("DuplicateDetectionHistoryTimeWindow"),
            DurationBounds {
                min_ms: 1_000,
                max_ms: 300_000
            }
        );
        assert_eq!(
            DurationBounds::for_tag("AutoDeleteOnIdle"),
            DurationBounds {
                min_ms: 1_000,
                max_ms: 3_600_000
            }
        );
    }

    #[test]
    fn test_get_text_trims_and_defaults() {
        let el = element("<Queue><Path>\n  orders  \n</Path></Queue>");
        assert_eq!(get_text(&el, "Path"), "orders");
        assert_eq!(get_text(&el, "ForwardTo"), "");
    }

    #[test]
    fn test_get_bool_is_exact() {
        for (text, expected) in [
            ("True", true),
            ("true", false),
            ("TRUE", false),
            ("1", false),
            (" True", false),
            ("", false),
        ] {
            let el = element(&format!(
                "<Queue><RequiresSession>{}</RequiresSession></Queue>",
                text
            ));
            assert_eq!(get_bool(&el, "RequiresSession"), expected, "text {:?}", text);
        }
        assert!(!get_bool(&element("<Queue/>"), "RequiresSession"));
    }

    #[test]
    fn test_get_int() {
        let el = element(
            "<Queue><MaxDeliveryCount>10</MaxDeliveryCount><Bad>ten</Bad><Mixed> 12abc</Mixed></Queue>",
        );
        assert_eq!(get_int(&el, "MaxDeliveryCount"), 10);
        assert_eq!(get_int(&el, "Bad"), 0);
        assert_eq!(get_int(&el, "Mixed"), 12);
        assert_eq!(get_int(&el, "Missing"), 0);
    }

    #[test]
    fn test_get_duration_clamps_per_tag() {
        let el = element(
            "<Queue>\
               <LockDuration>00:00:30</LockDuration>\
               <DefaultMessageTimeToLive>10675199.02:48:05.4775807</DefaultMessageTimeToLive>\
               <DuplicateDetectionHistoryTimeWindow>00:10:00</DuplicateDetectionHistoryTimeWindow>\
               <AutoDeleteOnIdle></AutoDeleteOnIdle>\
             </Queue>",
        );
        assert_eq!(get_duration(&el, "LockDuration"), "PT1M");
        assert_eq!(get_duration(&el, "DefaultMessageTimeToLive"), "PT1H");
        assert_eq!(get_duration(&el, "DuplicateDetectionHistoryTimeWindow"), "PT5M");
        assert_eq!(get_duration(&el, "AutoDeleteOnIdle"), "");
        assert_eq!(get_duration(&el, "Missing"), "");
    }

    #[test]
    fn test_getters_only_read_direct_children() {
        let el = element(
            "<Topic><Subscriptions><Subscription><Status>Active</Status></Subscription></Subscriptions></Topic>",
        );
        assert_eq!(get_text(&el, "Status"), "");
    }

    #[test]
    fn test_topic_without_subscriptions_is_dropped() {
        let root = element(
            "<Namespace><Topics>\
               <Topic><Path>empty</Path><Subscriptions/></Topic>\
               <Topic><Path>bare</Path></Topic>\
               <Topic><Path>live</Path><Subscriptions>\
                 <Subscription><Name>s1</Name></Subscription>\
                 <Subscription><Name>s2</Name></Subscription>\
               </Subscriptions></Topic>\
             </Topics></Namespace>",
        );
        let topics = ServiceBusImporter::new().find_topics(&root);
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name, "live");
        let names: Vec<&str> = topics[0]
            .subscriptions
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["s1", "s2"]);
        assert!(topics[0].subscriptions.iter().all(|s| s.rules.is_empty()));
    }
}
