// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for building test catalogs and sessions

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use promptforge::catalog::{Catalog, Role, Tool, VarDef};
use promptforge::template::{DelimiterStyle, VariableSpec};

pub struct TestCatalogBuilder {
    tools: Vec<Tool>,
}

impl TestCatalogBuilder {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    pub fn add_tool(mut self, name: &str) -> Self {
        self.tools.push(Tool {
            name: name.to_string(),
            description: None,
            roles: Default::default(),
        });
        self
    }

    pub fn add_role(mut self, tool: &str, role: &str, template: &str) -> Self {
        let tool = self
            .tools
            .iter_mut()
            .find(|t| t.name == tool)
            .expect("tool must be added before its roles");
        tool.roles.insert(
            role.to_string(),
            Role {
                description: format!("Test role: {}", role),
                template: template.to_string(),
                syntax: DelimiterStyle::Brace,
                vars: Default::default(),
            },
        );
        self
    }

    pub fn with_default_var(self, tool: &str, role: &str, name: &str, default: &str) -> Self {
        self.with_var(tool, role, name, VarDef::Default(default.to_string()))
    }

    pub fn with_options_var(self, tool: &str, role: &str, name: &str, options: &[&str]) -> Self {
        self.with_var(
            tool,
            role,
            name,
            VarDef::Options(options.iter().map(|s| s.to_string()).collect()),
        )
    }

    pub fn with_spec_var(self, tool: &str, role: &str, name: &str, spec: VariableSpec) -> Self {
        self.with_var(tool, role, name, VarDef::Spec(spec))
    }

    fn with_var(mut self, tool: &str, role: &str, name: &str, def: VarDef) -> Self {
        let tool = self
            .tools
            .iter_mut()
            .find(|t| t.name == tool)
            .expect("tool must be added before its variables");
        let role = tool
            .roles
            .get_mut(role)
            .expect("role must be added before its variables");
        role.vars.insert(name.to_string(), def);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog { tools: self.tools }
    }

    pub fn write_to_file(self, path: &Path) -> Catalog {
        let catalog = self.build();
        let yaml = serde_yaml::to_string(&catalog).expect("catalog serializes");
        std::fs::write(path, yaml).expect("catalog file written");
        catalog
    }
}

impl Default for TestCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("temp dir created"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("test file written");
        path
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
