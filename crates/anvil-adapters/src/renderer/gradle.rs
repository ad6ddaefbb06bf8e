//! Groovy DSL rendering for `settings.gradle` and `build.gradle`.

use std::fmt::{self, Write};

use anvil_core::domain::{
    ModuleBuildDescriptor, RootBuildDescriptor, SettingsDescriptor,
    dependencies::{Dependency, Notation, Plugin},
};

const INDENT: &str = "    ";

pub fn render_settings(settings: &SettingsDescriptor) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "rootProject.name = \"{}\"", settings.root_project_name)?;
    writeln!(out)?;
    for module in &settings.modules {
        writeln!(out, "include(\"{module}\")")?;
    }
    Ok(out)
}

pub fn render_root_build(root: &RootBuildDescriptor) -> Result<String, fmt::Error> {
    let mut out = String::new();

    write_plugins(&mut out, &root.plugins)?;
    writeln!(out)?;

    writeln!(out, "allprojects {{")?;
    writeln!(out, "{INDENT}group = '{}'", root.group)?;
    writeln!(out, "{INDENT}version = '{}'", root.version)?;
    writeln!(out)?;
    writeln!(out, "{INDENT}repositories {{")?;
    writeln!(out, "{INDENT}{INDENT}mavenCentral()")?;
    writeln!(out, "{INDENT}}}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "// Disable the jar task for the root project")?;
    writeln!(out, "jar.enabled = false")?;
    writeln!(out)?;

    writeln!(out, "subprojects {{")?;
    for id in &root.subproject_plugins {
        writeln!(out, "{INDENT}apply plugin: '{id}'")?;
    }
    writeln!(out)?;
    writeln!(out, "{INDENT}java {{")?;
    writeln!(out, "{INDENT}{INDENT}toolchain {{")?;
    writeln!(
        out,
        "{INDENT}{INDENT}{INDENT}languageVersion = JavaLanguageVersion.of({})",
        root.java_version
    )?;
    writeln!(out, "{INDENT}{INDENT}}}")?;
    writeln!(out, "{INDENT}}}")?;

    if !root.shared_dependencies.is_empty() {
        writeln!(out)?;
        write_dependencies(&mut out, &root.shared_dependencies, 1)?;
    }

    if !root.compiler_args.is_empty() {
        writeln!(out)?;
        writeln!(out, "{INDENT}tasks.withType(JavaCompile) {{")?;
        writeln!(out, "{INDENT}{INDENT}options.compilerArgs = [")?;
        let last = root.compiler_args.len() - 1;
        for (i, arg) in root.compiler_args.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            writeln!(out, "{INDENT}{INDENT}{INDENT}'{arg}'{sep}")?;
        }
        writeln!(out, "{INDENT}{INDENT}]")?;
        writeln!(out, "{INDENT}}}")?;
    }
    writeln!(out, "}}")?;

    Ok(out)
}

pub fn render_module_build(module: &ModuleBuildDescriptor) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if !module.plugins.is_empty() {
        write_plugins(&mut out, &module.plugins)?;
        writeln!(out)?;
    }

    write_dependencies(&mut out, &module.dependencies, 0)?;

    if module.jar_enabled {
        writeln!(out)?;
        writeln!(out, "jar {{")?;
        writeln!(out, "{INDENT}enabled = true")?;
        writeln!(out, "}}")?;
    }

    Ok(out)
}

fn write_plugins(out: &mut String, plugins: &[Plugin]) -> fmt::Result {
    writeln!(out, "plugins {{")?;
    for plugin in plugins {
        write!(out, "{INDENT}id '{}'", plugin.id)?;
        if let Some(version) = &plugin.version {
            write!(out, " version '{version}'")?;
        }
        if !plugin.apply {
            write!(out, " apply false")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "}}")
}

fn write_dependencies(out: &mut String, deps: &[Dependency], depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    writeln!(out, "{pad}dependencies {{")?;
    for dep in deps {
        writeln!(out, "{pad}{INDENT}{}", dependency_line(dep))?;
    }
    writeln!(out, "{pad}}}")
}

/// One dependency in Groovy notation, without indentation.
pub fn dependency_line(dep: &Dependency) -> String {
    let scope = dep.scope.keyword();
    match &dep.notation {
        Notation::Coordinate(c) => format!("{scope} '{c}'"),
        Notation::Project(m) => format!("{scope} project(':{m}')"),
        Notation::Platform(c) => format!("{scope} platform(\"{c}\")"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anvil_core::domain::{DbDriver, Module, ProjectConfig, ProjectConfigBuilder};

    fn builder() -> ProjectConfigBuilder {
        ProjectConfig::builder()
            .project_name("clinic")
            .group_id("com.example")
            .java_version("21")
            .springboot_version("3.2.0")
    }

    #[test]
    fn settings_matches_expected_text() {
        let cfg = builder().build().unwrap();
        let text = render_settings(&SettingsDescriptor::from_config(&cfg)).unwrap();
        assert_eq!(
            text,
            "rootProject.name = \"clinic-api\"\n\n\
             include(\"domain\")\ninclude(\"application\")\n\
             include(\"infrastructure\")\ninclude(\"api\")\n"
        );
    }

    #[test]
    fn root_build_without_libraries_has_no_dependency_block() {
        let cfg = builder().build().unwrap();
        let text = render_root_build(&RootBuildDescriptor::from_config(&cfg)).unwrap();
        assert!(text.contains("id 'org.springframework.boot' version '3.2.0' apply false"));
        assert!(text.contains("id 'io.spring.dependency-management' version '1.1.5'"));
        assert!(text.contains("group = 'com.example'"));
        assert!(text.contains("languageVersion = JavaLanguageVersion.of(21)"));
        assert!(!text.contains("dependencies {"));
        assert!(!text.contains("lombok"));
        assert!(!text.contains("mapstruct"));
    }

    #[test]
    fn root_build_with_libraries() {
        let cfg = builder().lombok(true).mapstruct(true).build().unwrap();
        let text = render_root_build(&RootBuildDescriptor::from_config(&cfg)).unwrap();
        assert!(text.contains("        compileOnly 'org.projectlombok:lombok:1.18.42'\n"));
        assert!(text.contains("        testAnnotationProcessor 'org.projectlombok:lombok:1.18.42'\n"));
        assert!(text.contains("        annotationProcessor 'org.mapstruct:mapstruct-processor:1.5.5.Final'\n"));
        assert!(text.contains("            '-Amapstruct.defaultComponentModel=spring'\n"));
        assert!(text.ends_with("    }\n}\n"));
    }

    #[test]
    fn infrastructure_build_lists_platform_projects_and_drivers() {
        let cfg = builder()
            .jpa(true)
            .db_drivers([DbDriver::PostgreSql, DbDriver::MongoDb])
            .build()
            .unwrap();
        let desc = ModuleBuildDescriptor::from_config(Module::Infrastructure, &cfg);
        let text = render_module_build(&desc).unwrap();
        let expected = "\
plugins {
    id 'java'
    id 'io.spring.dependency-management'
}

dependencies {
    implementation platform(\"org.springframework.boot:spring-boot-dependencies:3.2.0\")
    implementation project(':domain')
    implementation project(':application')
    implementation 'org.springframework.boot:spring-boot-starter-data-jpa'
    runtimeOnly 'org.postgresql:postgresql'
    implementation 'org.springframework.boot:spring-boot-starter-data-mongodb'
}

jar {
    enabled = true
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn domain_build_is_empty_dependencies_and_jar() {
        let cfg = builder().build().unwrap();
        let text =
            render_module_build(&ModuleBuildDescriptor::from_config(Module::Domain, &cfg)).unwrap();
        assert_eq!(text, "dependencies {\n}\n\njar {\n    enabled = true\n}\n");
    }

    #[test]
    fn api_build_has_boot_plugin_and_no_jar_block() {
        let cfg = builder().build().unwrap();
        let text =
            render_module_build(&ModuleBuildDescriptor::from_config(Module::Api, &cfg)).unwrap();
        assert!(text.contains("    id 'org.springframework.boot'\n"));
        assert!(text.contains("implementation 'com.fasterxml.jackson.core:jackson-databind'"));
        assert!(!text.contains("jar {"));
    }
}
