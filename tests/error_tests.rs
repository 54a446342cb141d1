use na_tagtree::{BinaryTag, Error, TagType};

#[test]
fn test_error_messages() {
    assert_eq!(Error::EndInList.to_string(), "cannot add a end to a list");
    assert_eq!(
        Error::TagMismatch {
            expected: TagType::Int,
            actual: TagType::String,
        }
        .to_string(),
        "trying to add tag of type string to list of int"
    );
    assert_eq!(
        Error::IndexOutOfRange { index: 4, len: 2 }.to_string(),
        "index 4 out of range for length 2"
    );
    assert_eq!(Error::MissingField("keybind").to_string(), "keybind must be set");
    assert_eq!(
        Error::InvalidKey("A:b".to_string()).to_string(),
        "invalid key: \"A:b\""
    );
}

#[test]
fn test_invalid_argument_classification() {
    assert!(Error::EndInList.is_invalid_argument());
    assert!(
        Error::TagMismatch {
            expected: TagType::Byte,
            actual: TagType::Long,
        }
        .is_invalid_argument()
    );
    assert!(!Error::IndexOutOfRange { index: 0, len: 0 }.is_invalid_argument());
    assert!(!Error::MissingField("key").is_invalid_argument());
}

#[test]
fn test_error_is_std_error() {
    fn check(_: &dyn std::error::Error) {}
    check(&Error::EndInList);

    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Error::EndInList);
    assert_eq!(boxed.to_string(), "cannot add a end to a list");
}

// Every variant is produced by some edit, builder or parser in the crate.
fn origin(error: &Error) -> &'static str {
    match error {
        Error::EndInList | Error::TagMismatch { .. } => "list element",
        Error::IndexOutOfRange { .. } => "index",
        Error::MissingField(_) => "builder",
        Error::InvalidKey(_) => "key",
    }
}

#[test]
fn test_every_variant_is_reachable() {
    use na_tagtree::{IntArrayTag, Key, KeybindComponent, ListTag, StringTag};

    let ints = ListTag::empty().add(1).unwrap();
    let produced = [
        ints.add(BinaryTag::End).unwrap_err(),
        ints.add(StringTag::of("x")).unwrap_err(),
        ints.get(3).unwrap_err(),
        IntArrayTag::of(vec![1]).get(1).unwrap_err(),
        KeybindComponent::builder().build().unwrap_err(),
        Key::parse("Bad Key").unwrap_err(),
    ];
    let origins: Vec<&str> = produced.iter().map(origin).collect();
    assert_eq!(
        origins,
        vec!["list element", "list element", "index", "index", "builder", "key"]
    );
}
