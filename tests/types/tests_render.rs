//! Canonical type rendering.

use rstest::rstest;
use symbridge::host::{AnnotationApplication, HostType, TypeProjection};
use symbridge::{ClassId, NullabilitySuffix, RenderOptions, SymbolId, render_type};

fn class(package: &str, name: &str) -> HostType {
    HostType::class(ClassId::top_level(package, name), vec![])
}

fn string() -> HostType {
    class("kotlin", "String")
}

fn int() -> HostType {
    class("kotlin", "Int")
}

fn list_of(arg: TypeProjection) -> HostType {
    HostType::class(ClassId::top_level("kotlin.collections", "List"), vec![arg])
}

fn string_alias() -> HostType {
    HostType::alias(ClassId::top_level("com.example", "Text"), string())
}

fn function_of(args: Vec<TypeProjection>) -> HostType {
    HostType::function(ClassId::top_level("kotlin", "Function1"), args)
}

fn render(ty: &HostType) -> String {
    render_type(ty, false, &RenderOptions::default())
}

#[rstest]
#[case(string(), "String")]
#[case(string().nullable(), "String?")]
#[case(list_of(TypeProjection::covariant(string())), "List<out String>")]
#[case(list_of(TypeProjection::contravariant(int())), "List<in Int>")]
#[case(list_of(TypeProjection::Star), "List<*>")]
#[case(list_of(TypeProjection::invariant(string().nullable())).nullable(), "List<String?>?")]
#[case(HostType::class_error("unresolved"), "<ERROR TYPE>")]
#[case(HostType::type_error("bad"), "<ERROR TYPE>")]
#[case(HostType::dynamic(), "<dynamic type>")]
#[case(HostType::definitely_not_null(HostType::type_parameter(SymbolId::new(3), "T")), "T & Any")]
#[case(HostType::flexible(string(), string().nullable()), "(String..String?)")]
#[case(HostType::integer_literal(42), "ILT: 42")]
#[case(HostType::intersection(vec![string(), int()]), "(String & Int)")]
#[case(HostType::type_parameter(SymbolId::new(1), "T").nullable(), "T?")]
#[case(HostType::captured(TypeProjection::covariant(string())), "CapturedType(out String)")]
fn test_render_shapes(#[case] ty: HostType, #[case] expected: &str) {
    assert_eq!(render(&ty), expected);
}

#[rstest]
#[case(false, "[typealias Text]")]
#[case(true, "String")]
fn test_alias_depends_on_function_context(#[case] in_function_type: bool, #[case] expected: &str) {
    assert_eq!(
        render_type(&string_alias(), in_function_type, &RenderOptions::default()),
        expected
    );
}

#[test]
fn test_alias_inside_function_type_arguments() {
    let ty = function_of(vec![
        TypeProjection::invariant(string_alias()),
        TypeProjection::invariant(class("kotlin", "Unit")),
    ]);
    assert_eq!(render(&ty), "Function1<String, Unit>");

    // outside a function type the alias keeps its marker
    assert_eq!(
        render(&list_of(TypeProjection::invariant(string_alias()))),
        "List<[typealias Text]>"
    );
}

#[test]
fn test_annotations_precede_the_body() {
    let ty = string()
        .with_annotation(AnnotationApplication::new(ClassId::top_level("com.example", "Tainted")))
        .nullable();
    assert_eq!(render(&ty), "[@Tainted] String?");
}

#[test]
fn test_annotation_arguments_in_type_key() {
    use symbridge::host::{AnnotationValue, ConstantValue, UseSiteTarget};

    let jvm_name = AnnotationApplication::new(ClassId::top_level("kotlin.jvm", "JvmName"))
        .with_target(UseSiteTarget::Get)
        .with_argument("name", AnnotationValue::Constant(ConstantValue::String("r".into())));
    assert_eq!(
        render(&string().with_annotation(jvm_name)),
        "[@get:JvmName(\"r\")] String"
    );

    let range = AnnotationApplication::new(ClassId::top_level("com.example", "Range"))
        .with_argument("from", AnnotationValue::Constant(ConstantValue::Int(0)))
        .with_argument("to", AnnotationValue::Constant(ConstantValue::Double(1e20)));
    assert_eq!(render(&int().with_annotation(range)), "[@Range(0, 1.0E20)] Int");
}

#[rstest]
#[case(NullabilitySuffix::Uniform, HostType::class_error("x").nullable(), "<ERROR TYPE>?")]
#[case(NullabilitySuffix::Uniform, HostType::dynamic().nullable(), "<dynamic type>?")]
#[case(NullabilitySuffix::SkipMarkers, HostType::class_error("x").nullable(), "<ERROR TYPE>")]
#[case(NullabilitySuffix::SkipMarkers, HostType::dynamic().nullable(), "<dynamic type>")]
#[case(NullabilitySuffix::SkipMarkers, string().nullable(), "String?")]
fn test_nullability_suffix_policy(
    #[case] policy: NullabilitySuffix,
    #[case] ty: HostType,
    #[case] expected: &str,
) {
    assert_eq!(
        render_type(&ty, false, &RenderOptions::with_nullability(policy)),
        expected
    );
}

#[test]
fn test_session_render_uses_configured_policy() {
    use symbridge::{MemoryHost, SessionConfig, analyze};

    let host = MemoryHost::new();
    let config = SessionConfig::default()
        .with_render(RenderOptions::with_nullability(NullabilitySuffix::SkipMarkers));
    analyze(&host, config, |session| {
        assert_eq!(session.render(&HostType::dynamic().nullable()), "<dynamic type>");
    });
}
