//! Source stub catalog.
//!
//! Each generated placeholder type is described once here: the module it
//! lives in, its package below the module's base package, its name and the
//! kind of declaration. The blueprint walks this table; nothing else lists
//! stub files.

use crate::domain::entities::ProjectConfig;
use crate::domain::value_objects::{ApiStyle, Module, TypeKind};

/// The example feature every generated project ships with.
pub const FEATURE: &str = "patient";

/// When a stub is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubCondition {
    Always,
    ApiStyle(ApiStyle),
}

impl StubCondition {
    pub fn holds(&self, config: &ProjectConfig) -> bool {
        match self {
            Self::Always => true,
            Self::ApiStyle(style) => config.has_api_style(*style),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StubDef {
    pub module: Module,
    /// `/`-separated package below the module base package.
    pub package: &'static str,
    pub type_name: &'static str,
    pub kind: TypeKind,
    pub condition: StubCondition,
}

const fn stub(
    module: Module,
    package: &'static str,
    type_name: &'static str,
    kind: TypeKind,
) -> StubDef {
    StubDef {
        module,
        package,
        type_name,
        kind,
        condition: StubCondition::Always,
    }
}

const fn stub_if(
    style: ApiStyle,
    package: &'static str,
    type_name: &'static str,
) -> StubDef {
    StubDef {
        module: Module::Api,
        package,
        type_name,
        kind: TypeKind::Class,
        condition: StubCondition::ApiStyle(style),
    }
}

use Module::{Api, Application, Domain, Infrastructure};
use TypeKind::{AbstractClass, Class, Interface};

/// Every stub, grouped by module in generation order.
pub static STUB_REGISTRY: &[StubDef] = &[
    // ── api ──────────────────────────────────────────────────────────────────
    stub(Api, "config", "SecurityConfig", Class),
    stub_if(ApiStyle::Rest, "patient/controllers/rest", "PatientRestController"),
    stub_if(ApiStyle::GraphQl, "patient/controllers/graphql", "PatientQueryResolver"),
    stub(Api, "patient/mapper", "PatientApiMapper", Interface),
    stub(Api, "patient/model", "CreatePatientRequest", Class),
    stub(Api, "patient/model", "PatientResponse", Class),
    // ── application ──────────────────────────────────────────────────────────
    stub(Application, "patient", "PatientCommandHandler", Class),
    stub(Application, "patient", "PatientQueryHandler", Class),
    stub(Application, "patient", "PatientEventHandler", Class),
    stub(Application, "patient/command", "CreatePatientCommand", Class),
    stub(Application, "patient/query", "GetPatientByIdQuery", Class),
    stub(Application, "patient/query", "PatientDetails", Class),
    // ── domain ───────────────────────────────────────────────────────────────
    stub(Domain, "shared/model", "AggregateRoot", AbstractClass),
    stub(Domain, "shared/event", "DomainEvent", Interface),
    stub(Domain, "shared/error", "ErrorOr", Class),
    stub(Domain, "patient/model", "Patient", Class),
    stub(Domain, "patient/model", "PatientName", Class),
    stub(Domain, "patient/repository", "PatientRepository", Interface),
    stub(Domain, "patient/event", "PatientCreatedEvent", Class),
    // ── infrastructure ───────────────────────────────────────────────────────
    stub(Infrastructure, "bus", "AnnotationDrivenCommandBus", Class),
    stub(Infrastructure, "bus", "AnnotationDrivenQueryBus", Class),
    stub(Infrastructure, "bus", "AnnotationDrivenEventBus", Class),
    stub(Infrastructure, "patient/persistence/entity", "PatientDbo", Class),
    stub(
        Infrastructure,
        "patient/persistence/mapper",
        "PatientPersistenceMapper",
        Interface,
    ),
    stub(
        Infrastructure,
        "patient/persistence/repository",
        "PatientRepositoryImpl",
        Class,
    ),
    stub(
        Infrastructure,
        "patient/persistence/repository/jpa",
        "PatientJpaRepository",
        Interface,
    ),
];

/// Stubs of `module` that `config` selects, in catalog order.
pub fn stubs_for<'a>(
    module: Module,
    config: &'a ProjectConfig,
) -> impl Iterator<Item = &'static StubDef> + 'a {
    STUB_REGISTRY
        .iter()
        .filter(move |s| s.module == module && s.condition.holds(config))
}
