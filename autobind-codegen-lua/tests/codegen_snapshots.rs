//! Snapshot tests for Lua binding generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use autobind_codegen::{NamingEngine, Template, testing::MemoryStore};
use autobind_codegen_lua::{
    BindingCodegen, DEFAULT_TEMPLATE, Generator, GeneratorContext, LuaTemplate, PLACEHOLDERS,
};
use autobind_core::{FsStore, GeneratedFile, WriteResult};
use autobind_ir::{Binding, BindingSet, ObjectRef, TypeInfo};
use autobind_manifest::GeneratorConfig;

fn generator(root: &Path) -> Generator {
    let config = GeneratorConfig::default();
    let lua = config.language("Lua").expect("Lua not configured").clone();
    let naming = NamingEngine::new(config.naming.clone()).strategy();
    Generator::new(GeneratorContext::new(lua, config.paths, naming).with_root(root))
}

fn bindings() -> BindingSet {
    [
        Binding::node("root", ObjectRef::new("Canvas")),
        Binding::missing("lost", TypeInfo::component("UnityEngine.UI.Button")),
        Binding::component(
            "scoreText",
            ObjectRef::new("Canvas/ScoreText"),
            TypeInfo::component("UnityEngine.UI.Text"),
        ),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_default_template_output() {
    let generator = generator(Path::new("proj"));
    let store = MemoryStore::new().with_file(generator.template_path(), DEFAULT_TEMPLATE);
    let out = generator.output_path("MainPanel");

    let artifact = generator
        .generate("MainPanel", &bindings(), &out, &store)
        .expect("Failed to generate");

    assert_eq!(
        out,
        Path::new("proj/Assets/Scripts/LuaScripts/UI/Generated/MainPanel.Bindings.lua")
    );
    insta::assert_snapshot!(artifact.content, @r#"
    -- This file was generated by autobind. Do not edit it by hand.

    ---@class MainPanelFields
    ---@field private _root CS.UnityEngine.GameObject
    ---@field private _scoreText CS.UnityEngine.UI.Text
    local MainPanelFields = {
        _root = nil,
        _scoreText = nil,
    }

    ---@class MainPanelBindings
    ---@field binder any
    ---@field fields MainPanelFields
    local MainPanelBindings = {}
    MainPanelBindings.__index = MainPanelBindings

    function MainPanelBindings.New(binder)
        local self = setmetatable({}, MainPanelBindings)
        self.binder = binder
        self.fields = setmetatable({}, { __index = MainPanelFields })
        return self
    end

    function MainPanelBindings:Bind()
        self.fields._root = self.binder:Get("root", typeof(CS.UnityEngine.GameObject))
        self.fields._scoreText = self.binder:Get("scoreText", typeof(CS.UnityEngine.UI.Text))
    end

    function MainPanelBindings:Clear()
        self.fields._root = nil
        self.fields._scoreText = nil
    end

    return MainPanelBindings
    "#);
    assert!(!artifact.content.contains("lost"));
}

#[test]
fn test_default_template_fully_supplied() {
    let template = Template::new(DEFAULT_TEMPLATE);

    assert_eq!(template.placeholders(), PLACEHOLDERS);

    let rendered = generator(Path::new("proj")).render(&template, "MainPanel", &bindings());
    assert!(!rendered.contains("${"));
}

#[test]
fn test_generation_is_idempotent() {
    let generator = generator(Path::new("proj"));
    let store = MemoryStore::new().with_file(generator.template_path(), DEFAULT_TEMPLATE);
    let out = generator.output_path("MainPanel");

    let first = generator.generate("MainPanel", &bindings(), &out, &store).unwrap();
    let second = generator.generate("MainPanel", &bindings(), &out, &store).unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(store.get(&out), Some(first.content));
}

#[test]
fn test_write_failure_is_reported() {
    let generator = generator(Path::new("proj"));
    let store = MemoryStore::new()
        .with_file(generator.template_path(), DEFAULT_TEMPLATE)
        .read_only();
    let out = generator.output_path("MainPanel");

    let err = generator
        .generate("MainPanel", &bindings(), &out, &store)
        .unwrap_err();

    assert!(format!("{:#}", err).contains("MainPanel.Bindings.lua"));
}

#[test]
fn test_init_template_on_disk() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let generator = generator(temp.path());

    let written = LuaTemplate::new("LuaBinding.txt")
        .write(&temp.path().join("Templates"), &FsStore)
        .unwrap();
    assert_eq!(written, WriteResult::Written);

    let out = generator.output_path("HudPanel");
    generator
        .generate("HudPanel", &BindingSet::new(), &out, &FsStore)
        .unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("local HudPanelBindings = {}"));
    assert!(content.ends_with("return HudPanelBindings\n"));
}
