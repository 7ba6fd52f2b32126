//! End-to-end conversion tests

use serde_json::{Value, json};
use servicebus_emulator_config::{ConversionError, convert_to_json, transform};

#[test]
fn test_single_queue_document() {
    let xml = r#"<Namespace>
        <Queues>
          <Queue>
            <Path>Q1</Path>
            <LockDuration>00:02:00</LockDuration>
            <RequiresSession>True</RequiresSession>
          </Queue>
        </Queues>
      </Namespace>"#;

    let config = transform(xml).unwrap();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(
        value,
        json!({
            "UserConfig": {
                "Namespaces": [{
                    "Name": "sbemulatorns",
                    "Queues": [{
                        "Name": "Q1",
                        "Properties": {
                            "LockDuration": "PT2M",
                            "RequiresDuplicateDetection": false,
                            "RequiresSession": true,
                            "DefaultMessageTimeToLive": "",
                            "DeadLetteringOnMessageExpiration": false,
                            "DuplicateDetectionHistoryTimeWindow": "",
                            "MaxDeliveryCount": 0,
                            "ForwardTo": "",
                            "ForwardDeadLetteredMessagesTo": ""
                        }
                    }],
                    "Topics": []
                }],
                "Logging": { "Type": "File" }
            }
        })
    );
}

#[test]
fn test_topic_document_shape() {
    let xml = r#"<Namespace>
        <Topics>
          <Topic>
            <Path>T1</Path>
            <Subscriptions>
              <Subscription><Name>S1</Name><LockDuration>00:01:30</LockDuration></Subscription>
            </Subscriptions>
          </Topic>
        </Topics>
      </Namespace>"#;

    let json_text = convert_to_json(xml, true).unwrap();
    let value: Value = serde_json::from_str(&json_text).unwrap();
    let topic = &value["UserConfig"]["Namespaces"][0]["Topics"][0];

    assert_eq!(topic["Name"], "T1");
    assert_eq!(topic["Properties"]["MaxSizeInMegabytes"], 0);
    assert_eq!(topic["Properties"]["Status"], "");
    assert_eq!(topic["Subscriptions"][0]["Name"], "S1");
    assert_eq!(
        topic["Subscriptions"][0]["Properties"]["LockDuration"],
        "PT1M30S"
    );
    assert_eq!(topic["Subscriptions"][0]["Rules"], json!([]));
    assert_eq!(
        topic["Properties"].as_object().unwrap().len(),
        14,
        "topic property set"
    );
    assert_eq!(
        topic["Subscriptions"][0]["Properties"]
            .as_object()
            .unwrap()
            .len(),
        7,
        "subscription property set"
    );
}

#[test]
fn test_entity_order_follows_document() {
    let xml = r#"<Namespace><Queues>
        <Queue><Path>c</Path></Queue>
        <Queue><Path>a</Path></Queue>
        <Queue><Path>b</Path></Queue>
      </Queues></Namespace>"#;

    let config = transform(xml).unwrap();
    let names: Vec<&str> = config.namespace().unwrap().queues.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_transform_is_repeatable() {
    let xml = "<Namespace><Queues><Queue><Path>q</Path><LockDuration>00:09:00</LockDuration></Queue></Queues></Namespace>";
    assert_eq!(transform(xml).unwrap(), transform(xml).unwrap());
}

#[test]
fn test_transform_parallel_calls() {
    let xml = "<Namespace><Queues><Queue><Path>q</Path></Queue></Queues></Namespace>";
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || transform(xml).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().namespace().unwrap().queues[0].name, "q");
    }
}

#[test]
fn test_non_xml_input_fails() {
    let result = transform("this is not xml");
    assert!(matches!(result, Err(ConversionError::ImportError(_))));
}
