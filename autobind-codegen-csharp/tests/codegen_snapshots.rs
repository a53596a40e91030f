//! Snapshot tests for C# binding generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use autobind_codegen::{NamingEngine, Template, testing::MemoryStore};
use autobind_codegen_csharp::{
    BindingCodegen, CSharpTemplate, DEFAULT_TEMPLATE, Generator, GeneratorContext, PLACEHOLDERS,
};
use autobind_core::{FsStore, GeneratedFile, WriteResult};
use autobind_ir::{Binding, BindingSet, ObjectRef, TypeInfo};
use autobind_manifest::GeneratorConfig;

fn generator(root: &Path) -> Generator {
    let config = GeneratorConfig::default();
    let csharp = config.language("C#").expect("C# not configured").clone();
    let naming = NamingEngine::new(config.naming.clone()).strategy();
    Generator::new(GeneratorContext::new(csharp, config.paths, naming).with_root(root))
}

fn bindings() -> BindingSet {
    [
        Binding::node("_root", ObjectRef::new("Canvas")),
        Binding::missing("_lost", TypeInfo::component("UnityEngine.UI.Button")),
        Binding::component(
            "_scoreText",
            ObjectRef::new("Canvas/ScoreText"),
            TypeInfo::component("UnityEngine.UI.Text"),
        ),
    ]
    .into_iter()
    .collect()
}

fn store_with_template(generator: &Generator) -> MemoryStore {
    MemoryStore::new().with_file(generator.template_path(), DEFAULT_TEMPLATE)
}

#[test]
fn test_default_template_output() {
    let generator = generator(Path::new("proj"));
    let store = store_with_template(&generator);
    let out = generator.output_path("MainPanel");

    let artifact = generator
        .generate("MainPanel", &bindings(), &out, &store)
        .expect("Failed to generate");

    assert_eq!(
        out,
        Path::new("proj/Assets/Scripts/Scripts/UI/Generated/MainPanel.Bindings.cs")
    );
    insta::assert_snapshot!(artifact.content, @r#"
    // <auto-generated>
    //     This file was generated by autobind. Do not edit it by hand.
    // </auto-generated>

    using UnityEngine;
    using UnityEngine.UI;

    namespace Game.UI
    {
        public partial class MainPanel
        {
            private GameObject _root;
            private Text _scoreText;

            public GameObject Root => _root;
            public Text ScoreText => _scoreText;

            private void Bind(AutoBindComponent binder)
            {
                _root = binder.Get<GameObject>("_root");
                _scoreText = binder.Get<Text>("_scoreText");
            }

            private void UnBind()
            {
                _root = null;
                _scoreText = null;
            }
        }
    }
    "#);
}

#[test]
fn test_missing_bindings_never_emitted() {
    let generator = generator(Path::new("proj"));
    let store = store_with_template(&generator);
    let out = generator.output_path("MainPanel");

    let artifact = generator
        .generate("MainPanel", &bindings(), &out, &store)
        .unwrap();

    assert!(!artifact.content.contains("_lost"));
    assert!(!artifact.content.contains("Button"));
}

#[test]
fn test_generation_is_idempotent() {
    let generator = generator(Path::new("proj"));
    let store = store_with_template(&generator);
    let out = generator.output_path("MainPanel");

    let first = generator.generate("MainPanel", &bindings(), &out, &store).unwrap();
    let second = generator.generate("MainPanel", &bindings(), &out, &store).unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(second.written, Some(WriteResult::Written));
    assert_eq!(store.get(&out), Some(second.content));
}

#[test]
fn test_default_template_fully_supplied() {
    let template = Template::new(DEFAULT_TEMPLATE);

    for name in template.placeholders() {
        assert!(
            PLACEHOLDERS.contains(&name.as_str()),
            "template declares unsupplied placeholder {}",
            name
        );
    }

    let generator = generator(Path::new("proj"));
    let rendered = generator.render(&template, "MainPanel", &bindings());
    for name in PLACEHOLDERS {
        assert!(!rendered.contains(&format!("${{{}}}", name)));
    }
}

#[test]
fn test_missing_template_fails_without_writing() {
    let generator = generator(Path::new("proj"));
    let store = MemoryStore::new();
    let out = generator.output_path("MainPanel");

    let err = generator
        .generate("MainPanel", &bindings(), &out, &store)
        .unwrap_err();

    assert!(format!("{:#}", err).contains("CSharpBinding.txt"));
    assert!(store.paths().is_empty());
}

#[test]
fn test_init_template_then_generate_on_disk() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let generator = generator(temp.path());
    let store = FsStore;
    let template_dir = temp.path().join("Templates");

    let written = CSharpTemplate::new("CSharpBinding.txt")
        .write(&template_dir, &store)
        .unwrap();
    assert_eq!(written, WriteResult::Written);

    // A second init keeps local edits
    std::fs::write(template_dir.join("CSharpBinding.txt"), "class ${ClassName} {}\n").unwrap();
    let skipped = CSharpTemplate::new("CSharpBinding.txt")
        .write(&template_dir, &store)
        .unwrap();
    assert_eq!(skipped, WriteResult::Skipped);

    let out = generator.output_path("MainPanel");
    generator
        .generate("MainPanel", &bindings(), &out, &store)
        .unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    insta::assert_snapshot!(content, @"class MainPanel {}");
}
