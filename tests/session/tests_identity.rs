//! Adapter identity guarantees.

use std::sync::Arc;

use symbridge::{Error, SessionConfig, analyze};

use crate::helpers::fixtures::shapes;

#[test]
fn test_same_symbol_same_adapter() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let a = session.adapter_for(s.circle).unwrap();
        let b = session.adapter_for(s.circle).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    });
}

#[test]
fn test_members_share_identity_with_direct_lookup() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let circle = session.adapter_for(s.circle).unwrap();
        let radius = session.adapter_for(s.radius).unwrap();
        let members = session.declarations(&circle).unwrap();
        assert!(members.iter().any(|m| Arc::ptr_eq(m, &radius)));

        let parent = session.parent(&radius).unwrap().unwrap();
        assert!(Arc::ptr_eq(&parent, &circle));
    });
}

#[test]
fn test_distinct_symbols_distinct_adapters() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let shape_area = session.adapter_for(s.shape_area).unwrap();
        let circle_area = session.adapter_for(s.circle_area).unwrap();
        assert_eq!(shape_area.name(), circle_area.name());
        assert!(!Arc::ptr_eq(&shape_area, &circle_area));
    });
}

#[test]
fn test_sessions_do_not_share_adapters() {
    let s = shapes();
    let first = analyze(&s.host, SessionConfig::default(), |session| {
        session.adapter_for(s.circle).unwrap()
    });
    analyze(&s.host, SessionConfig::default(), |session| {
        let second = session.adapter_for(s.circle).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(matches!(
            session.origin(&first),
            Err(Error::ForeignSession { .. })
        ));
        assert!(session.origin(&second).is_ok());
    });
}

#[test]
fn test_cache_grows_only_on_first_request() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        assert_eq!(session.adapter_count(), 0);
        let circle = session.adapter_for(s.circle).unwrap();
        assert_eq!(session.adapter_count(), 1);
        session.declarations(&circle).unwrap();
        let after_members = session.adapter_count();
        session.declarations(&circle).unwrap();
        assert_eq!(session.adapter_count(), after_members);
    });
}
