//! Origin, location, modifiers and documentation.

use symbridge::model::DeclarationCategory;
use symbridge::{Location, Modifier, Origin, SessionConfig, analyze};

use crate::helpers::fixtures::{SHAPES_PATH, shapes};

#[test]
fn test_origins() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let origin = |symbol| session.origin(&session.adapter_for(symbol).unwrap()).unwrap();
        assert_eq!(origin(s.circle), Origin::Kotlin);
        assert_eq!(origin(s.label_getter), Origin::Synthetic);
        assert_eq!(origin(s.library_class), Origin::KotlinLib);
        assert_eq!(origin(s.java_binary), Origin::JavaLib);
    });
}

#[test]
fn test_locations_are_one_based() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let circle = session.adapter_for(s.circle).unwrap();
        assert_eq!(session.location(&circle).unwrap(), Location::file(SHAPES_PATH, 9));

        let label = session.adapter_for(s.label).unwrap();
        assert_eq!(session.location(&label).unwrap().line(), Some(10));

        let file = session.adapter_for(s.file_symbol).unwrap();
        assert_eq!(session.location(&file).unwrap().line(), Some(1));
    });
}

#[test]
fn test_missing_locations() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        // no source handle
        let getter = session.adapter_for(s.label_getter).unwrap();
        assert!(session.location(&getter).unwrap().is_non_existent());
        // source in a file the session has no document for
        let objects = session.adapter_for(s.java_binary).unwrap();
        assert_eq!(session.location(&objects).unwrap(), Location::NonExistent);
    });
}

#[test]
fn test_modifiers_and_doc() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let shape = session.adapter_for(s.shape).unwrap();
        assert_eq!(
            session.modifiers(&shape).unwrap(),
            vec![Modifier::Public, Modifier::Open]
        );
        let secret = session.adapter_for(s.secret).unwrap();
        assert_eq!(session.modifiers(&secret).unwrap(), vec![Modifier::Private]);

        let circle = session.adapter_for(s.circle).unwrap();
        assert_eq!(session.doc_string(&circle).unwrap().as_deref(), Some("A circle."));
        assert_eq!(session.doc_string(&shape).unwrap(), None);
    });
}

#[test]
fn test_parent_chain() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let value = session.adapter_for(s.label_value).unwrap();

        let setter = session.parent(&value).unwrap().unwrap();
        assert_eq!(setter.symbol(), s.label_setter);

        let property = session
            .find_parent_of_type(&value, DeclarationCategory::Property)
            .unwrap()
            .unwrap();
        assert_eq!(property.symbol(), s.label);

        let class = session
            .find_parent_of_type(&value, DeclarationCategory::Class)
            .unwrap()
            .unwrap();
        assert_eq!(class.symbol(), s.circle);

        let file = session
            .find_parent_of_type(&value, DeclarationCategory::File)
            .unwrap()
            .unwrap();
        assert_eq!(file.symbol(), s.file_symbol);
        assert!(session.parent(&file).unwrap().is_none());

        assert!(
            session
                .find_parent_of_type(&value, DeclarationCategory::TypeAlias)
                .unwrap()
                .is_none()
        );
    });
}

#[test]
fn test_containing_declaration_and_file() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let radius = session.adapter_for(s.radius).unwrap();
        let circle = session.containing_declaration(&radius).unwrap().unwrap();
        assert_eq!(circle.symbol(), s.circle);
        // a file is not a declaration container
        assert!(session.containing_declaration(&circle).unwrap().is_none());

        let getter = session.adapter_for(s.label_getter).unwrap();
        let file = session.containing_file(&getter).unwrap().unwrap();
        assert_eq!(file.symbol(), s.file_symbol);
        assert_eq!(file.name(), Some("Shapes.kt"));
    });
}
