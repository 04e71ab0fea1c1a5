//! Classifier resolution and reference elements against a host.

use symbridge::host::{HostType, MemoryHost, SymbolKind, TypeProjection};
use symbridge::types::{
    ArgumentVariance, Classifier, ReferenceElement, TypeArgument, reference_element, to_projection,
};
use symbridge::{ClassId, SessionConfig, analyze};

use crate::helpers::fixtures::{double, shapes, string};

#[test]
fn test_classifier_of_fixture_types() {
    let s = shapes();
    let shape_type = HostType::class(ClassId::top_level("com.example", "Shape"), vec![]);
    analyze(&s.host, SessionConfig::default(), |session| {
        assert_eq!(session.classifier_of(&shape_type), Some(Classifier::Class(s.shape)));
        assert_eq!(
            session.classifier_of(&HostType::flexible(shape_type.clone(), double())),
            Some(Classifier::Class(s.shape))
        );
        assert_eq!(
            session.classifier_of(&HostType::definitely_not_null(shape_type.clone().nullable())),
            Some(Classifier::Class(s.shape))
        );
        // kotlin.Double is not part of the fixture
        assert_eq!(session.classifier_of(&double()), None);
        assert_eq!(session.classifier_of(&HostType::dynamic()), None);
        assert_eq!(
            session.classifier_of(&HostType::captured(TypeProjection::covariant(shape_type.clone()))),
            None
        );

        let decl = session.classifier_declaration(&shape_type).unwrap().unwrap();
        assert!(std::sync::Arc::ptr_eq(&decl, &session.adapter_for(s.shape).unwrap()));
    });
}

#[test]
fn test_local_class_found_through_outer_scope() {
    let mut host = MemoryHost::new();
    let outer_id = ClassId::top_level("com.example", "Outer");
    let outer = host
        .symbol(SymbolKind::NamedClass, "Outer")
        .class_id(outer_id.clone())
        .finish();
    let local = host.symbol(SymbolKind::NamedClass, "Helper").member_of(outer).finish();
    host.symbol(SymbolKind::FunctionLike, "Helper").member_of(outer).finish();

    let local_id = outer_id.nested("Helper").into_local();
    let missing_id = outer_id.nested("Missing").into_local();
    analyze(&host, SessionConfig::default(), |session| {
        let found = session.class_by_id(&local_id).unwrap().unwrap();
        assert_eq!(found.symbol(), local);
        assert!(session.class_by_id(&missing_id).unwrap().is_none());
        assert_eq!(
            session.classifier_of(&HostType::class(local_id.clone(), vec![])),
            Some(Classifier::Class(local))
        );
    });
}

#[test]
fn test_reference_elements() {
    let function = HostType::function(
        ClassId::top_level("kotlin", "Function0"),
        vec![TypeProjection::invariant(string())],
    );
    assert_eq!(reference_element(&function), Some(ReferenceElement::Callable));
    assert_eq!(reference_element(&HostType::dynamic()), Some(ReferenceElement::Dynamic));
    assert_eq!(reference_element(&HostType::class_error("x")), None);
    assert!(matches!(
        reference_element(&HostType::flexible(string(), string().nullable())),
        Some(ReferenceElement::Classifier { ref name, qualifier: 0 }) if name == "String"
    ));
}

#[test]
#[should_panic(expected = "Unexpected type element")]
fn test_reference_element_rejects_integer_literal() {
    reference_element(&HostType::integer_literal(1));
}

#[test]
fn test_type_argument_projection() {
    let star = to_projection(TypeArgument {
        variance: ArgumentVariance::Covariant,
        ty: None,
    });
    assert_eq!(star, TypeProjection::Star);
    assert_eq!(
        to_projection(TypeArgument {
            variance: ArgumentVariance::Contravariant,
            ty: Some(string()),
        }),
        TypeProjection::contravariant(string())
    );
}

#[test]
fn test_alias_type_names_the_alias_declaration() {
    let mut host = MemoryHost::new();
    let alias_id = ClassId::top_level("com.example", "Label");
    let alias = host
        .symbol(SymbolKind::TypeAlias, "Label")
        .class_id(alias_id.clone())
        .declared_type(string())
        .finish();
    let ty = HostType::alias(alias_id.clone(), string());
    analyze(&host, SessionConfig::default(), |session| {
        assert_eq!(session.classifier_of(&ty), Some(Classifier::TypeAlias(alias)));
        let decl = session.classifier_declaration(&ty).unwrap().unwrap();
        assert_eq!(decl.symbol(), alias);
        assert_eq!(session.class_id(&decl).unwrap(), Some(alias_id));
        assert_eq!(session.rendered_type(&decl).unwrap().as_deref(), Some("String"));
    });
}
