//! File templates for new modules

use std::path::PathBuf;

/// A file to write, relative to the module directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Same file, moved under `dir`
    pub fn under(self, dir: &str) -> Self {
        Self {
            path: PathBuf::from(dir).join(self.path),
            contents: self.contents,
        }
    }
}

const PYPROJECT_TOML: &str = r#"[build-system]
requires = ["setuptools"]
build-backend = "setuptools.build_meta"
"#;

/// Python package name for a module: dashes become underscores
pub fn python_package(name: &str) -> String {
    name.replace('-', "_")
}

/// `my-module_name` -> `MyModuleName`
fn pascal_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn package_json(name: &str) -> String {
    format!(
        r#"{{
  "name": "@modules/{name}",
  "version": "1.0.0",
  "description": "{name} module",
  "private": true,
  "main": "index.js",
  "x-dependencies": {{}}
}}
"#
    )
}

fn index_js(name: &str) -> String {
    let component = pascal_case(name);
    format!(
        r#"import React from "react";
import {{ StyleSheet, Text, View }} from "react-native";

const {component} = () => {{
  return (
    <View style={{styles.container}}>
      <Text>{name}</Text>
    </View>
  );
}};

const styles = StyleSheet.create({{
  container: {{
    flex: 1,
    alignItems: "center",
    justifyContent: "center"
  }}
}});

export default {{
  title: "{name}",
  navigator: {component}
}};
"#
    )
}

fn setup_py(package: &str) -> String {
    format!(
        r#"from setuptools import setup
from setuptools.command.build import build


class BuildCommand(build):
    def initialize_options(self):
        build.initialize_options(self)
        self.build_base = "/tmp"


setup(
    name="cb_{package}",
    version="0.1",
    packages=["{package}", "{package}.migrations"],
    install_requires=[],
    cmdclass={{"build": BuildCommand}},
)
"#
    )
}

fn apps_py(package: &str) -> String {
    format!(
        r#"from django.apps import AppConfig


class {config}Config(AppConfig):
    default_auto_field = "django.db.models.BigAutoField"
    name = "{package}"
"#,
        config = pascal_case(package)
    )
}

/// `package.json` and `index.js` of a React Native module
pub fn react_native_files(name: &str) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new("package.json", package_json(name)),
        GeneratedFile::new("index.js", index_js(name)),
    ]
}

/// An installable Django app: setup files plus the app package
pub fn django_files(name: &str) -> Vec<GeneratedFile> {
    let package = python_package(name);
    let in_package = |file: &str| format!("{package}/{file}");
    vec![
        GeneratedFile::new("setup.py", setup_py(&package)),
        GeneratedFile::new("pyproject.toml", PYPROJECT_TOML),
        GeneratedFile::new(in_package("__init__.py"), ""),
        GeneratedFile::new(in_package("apps.py"), apps_py(&package)),
        GeneratedFile::new(
            in_package("models.py"),
            "from django.db import models  # noqa: F401\n",
        ),
        GeneratedFile::new(
            in_package("admin.py"),
            "from django.contrib import admin  # noqa: F401\n",
        ),
        GeneratedFile::new(
            in_package("urls.py"),
            "from django.urls import path  # noqa: F401\n\nurlpatterns = []\n",
        ),
        GeneratedFile::new(
            in_package("views.py"),
            "from django.shortcuts import render  # noqa: F401\n",
        ),
        GeneratedFile::new(in_package("migrations/__init__.py"), ""),
    ]
}
