use crate::EngineRule;

/// Built-in rendering-engine rules, in priority order.
pub(crate) fn get() -> Vec<EngineRule> {
    vec![
        engine_rule! { regex: r"NetFront", name: "NetFront" },
        engine_rule! { regex: r"Edge/", name: "Edge" },
        engine_rule! { regex: r"Trident", name: "Trident" },
        engine_rule! { regex: r"Blink", name: "Blink" },
        engine_rule! { regex: r"(?:Apple)?WebKit", name: "WebKit" },
        engine_rule! { regex: r"Presto", name: "Presto" },
        engine_rule! { regex: r"Goanna", name: "Goanna" },
        // "like Gecko" never carries the slash
        engine_rule! { regex: r"Gecko/", name: "Gecko" },
        engine_rule! { regex: r"KHTML", name: "KHTML" },
        engine_rule! { regex: r"NetSurf", name: "NetSurf" },
        engine_rule! { regex: r"Servo", name: "Servo" },
        engine_rule! { regex: r"LibWeb\+LibJs", name: "LibWeb" },
    ]
}
