//! Lookup tables for Hungarian type prefixes.

/// Primitive keywords and their prefixes.
pub(crate) const PRIMITIVES: &[(&str, &str)] = &[
    ("bool", "b"),
    ("byte", "by"),
    ("sbyte", "sb"),
    ("char", "c"),
    ("decimal", "dec"),
    ("double", "d"),
    ("float", "f"),
    ("int", "n"),
    ("uint", "u"),
    ("long", "l"),
    ("ulong", "ul"),
    ("short", "s"),
    ("ushort", "us"),
    ("string", "str"),
    ("object", "obj"),
];

/// Runtime (CLR) names of the primitive keywords.
pub(crate) const PRIMITIVE_ALIASES: &[(&str, &str)] = &[
    ("System.Boolean", "bool"),
    ("System.Byte", "byte"),
    ("System.SByte", "sbyte"),
    ("System.Char", "char"),
    ("System.Decimal", "decimal"),
    ("System.Double", "double"),
    ("System.Single", "float"),
    ("System.Int32", "int"),
    ("System.UInt32", "uint"),
    ("System.Int64", "long"),
    ("System.UInt64", "ulong"),
    ("System.Int16", "short"),
    ("System.UInt16", "ushort"),
    ("System.String", "string"),
    ("System.Object", "object"),
];

/// Generic container definitions. The element type is not encoded.
pub(crate) const COLLECTIONS: &[(&str, &str)] = &[
    ("List", "lst"),
    ("Dictionary", "dict"),
    ("HashSet", "set"),
    ("Queue", "queue"),
    ("Stack", "stack"),
];

/// Engine component types, keyed by display name.
pub(crate) const COMPONENTS: &[(&str, &str)] = &[
    ("Transform", "trans"),
    ("RectTransform", "rect"),
    ("Renderer", "rdr"),
    ("MeshRenderer", "mesh"),
    ("SkinnedMeshRenderer", "skin"),
    ("ParticleSystemRenderer", "ps"),
    ("Collider", "col"),
    ("BoxCollider", "box"),
    ("SphereCollider", "sphere"),
    ("CapsuleCollider", "capsule"),
    ("MeshCollider", "meshCol"),
    ("Text", "txt"),
    ("Button", "btn"),
    ("Image", "img"),
    ("RawImage", "raw"),
    ("Slider", "sld"),
    ("Toggle", "tgl"),
    ("Scrollbar", "scroll"),
    ("ScrollRect", "scrollRect"),
    ("Dropdown", "drop"),
    ("InputField", "input"),
    ("Canvas", "canvas"),
    ("CanvasGroup", "canvasGroup"),
    ("GraphicRaycaster", "raycaster"),
    ("LayoutGroup", "layout"),
    ("ContentSizeFitter", "sizer"),
    ("AspectRatioFitter", "aspect"),
    ("AudioSource", "audio"),
    ("AudioListener", "listener"),
    ("Animator", "anim"),
    ("Animation", "anim"),
    ("Rigidbody", "rb"),
    ("Rigidbody2D", "rb2d"),
    ("GameObject", "go"),
    ("ParticleSystem", "ps"),
    ("Camera", "cam"),
    ("Light", "light"),
    ("NavMeshAgent", "agent"),
];

/// Suffixes stripped from custom type names; the first match wins.
pub(crate) const SUFFIXES: &[&str] = &[
    "Component",
    "Behaviour",
    "Behavior",
    "Controller",
    "Manager",
    "System",
    "Script",
    "Base",
    "Interface",
    "Abstract",
    "Impl",
];

pub(crate) fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
