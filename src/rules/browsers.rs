use crate::Rule;

/// Built-in browser rules, in priority order.
pub(crate) fn get() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(rules_vendor_builds());
    rules.extend(rules_opera());
    rules.extend(rules_edge());
    rules.extend(rules_chromium_derivatives());
    rules.extend(rules_chrome());
    rules.extend(rules_firefox());
    rules.extend(rules_internet_explorer());
    rules.extend(rules_webkit());
    rules.extend(rules_misc());
    rules
}

/// Browsers shipped by device vendors. Their user agents also carry
/// `Chrome/` or `Firefox/`, so they go first.
fn rules_vendor_builds() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"Sailfish ?Browser(?:/(\d+[\.\d]+))?",
            name: "Sailfish Browser",
            version: "$1",
            engine: "Gecko",
        },
        browser_rule! {
            regex: r"SamsungBrowser(?:/(\d+[\.\d]+))?",
            name: "Samsung Browser",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"DuckDuckGo/(\d+[\.\d]*)",
            name: "DuckDuckGo Privacy Browser",
            version: "$1",
        },
        browser_rule! {
            regex: r"HuaweiBrowser(?:/(\d+[\.\d]+))?",
            name: "Huawei Browser",
            version: "$1",
        },
        browser_rule! {
            regex: r"MiuiBrowser(?:/(\d+[\.\d]+))?",
            name: "MIUI Browser",
            version: "$1",
        },
        browser_rule! {
            regex: r"Silk(?:/(\d+[\.\d]+))?",
            name: "Mobile Silk",
            version: "$1",
            engine: "WebKit",
            versions: { "28" => "Blink" },
        },
    ]
}

fn rules_opera() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"OPRGX(?:/(\d+[\.\d]+))?",
            name: "Opera GX",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"OPT/(\d+[\.\d]+)",
            name: "Opera Touch",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"(?:Mobile|Tablet).*OPR/(\d+[\.\d]+)",
            name: "Opera Mobile",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"OPR/(\d+[\.\d]+)",
            name: "Opera",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"Opera Mini(?:/att)?/?(\d+[\.\d]+)?",
            name: "Opera Mini",
            version: "$1",
            engine: "Presto",
        },
        browser_rule! {
            regex: r"Opera Mobi.*Version/(\d+[\.\d]+)",
            name: "Opera Mobile",
            version: "$1",
            engine: "Presto",
        },
        browser_rule! {
            regex: r"Opera[/ ](?:9\.80.*Version/)?(\d+[\.\d]+)",
            name: "Opera",
            version: "$1",
            engine: "",
            versions: { "3.5" => "Elektra", "7" => "Presto", "15" => "Blink" },
        },
    ]
}

fn rules_edge() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"EdgiOS/(\d+[\.\d]+)",
            name: "Microsoft Edge",
            version: "$1",
            engine: "WebKit",
        },
        browser_rule! {
            regex: r"Edge[ /](\d+[\.\d]+)",
            name: "Microsoft Edge",
            version: "$1",
            engine: "Edge",
        },
        browser_rule! {
            regex: r"Edg(?:A)?/(\d+[\.\d]+)",
            name: "Microsoft Edge",
            version: "$1",
            engine: "Blink",
        },
    ]
}

fn rules_chromium_derivatives() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"Whale/(\d+[\.\d]+)",
            name: "Whale Browser",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"coc_coc_browser(?:/(\d+[\.\d]+))?",
            name: "Coc Coc",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"YaBrowser(?:/(\d+[\.\d]+))?",
            name: "Yandex Browser",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"Vivaldi(?:/(\d+[\.\d]+))?",
            name: "Vivaldi",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"Brave(?: Chrome)?(?:/(\d+[\.\d]+))?",
            name: "Brave",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"UC ?Browser(?:[ /]?(\d+[\.\d]+))?",
            name: "UC Browser",
            version: "$1",
        },
        browser_rule! {
            regex: r"M?QQBrowser(?:/(\d+[\.\d]+))?",
            name: "QQ Browser",
            version: "$1",
        },
    ]
}

fn rules_chrome() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"CriOS/(\d+[\.\d]+)",
            name: "Chrome Mobile iOS",
            version: "$1",
            engine: "WebKit",
        },
        browser_rule! {
            regex: r"HeadlessChrome(?:/(\d+[\.\d]+))?",
            name: "Headless Chrome",
            version: "$1",
            engine: "Blink",
        },
        browser_rule! {
            regex: r"wv\).+Chrome/(\d+[\.\d]+)",
            name: "Chrome Webview",
            version: "$1",
            engine: "WebKit",
            versions: { "28" => "Blink" },
        },
        browser_rule! {
            regex: r"Chrome/(\d+[\.\d]+) Mobile",
            name: "Chrome Mobile",
            version: "$1",
            engine: "WebKit",
            versions: { "28" => "Blink" },
        },
        browser_rule! {
            regex: r"CrMo(?:/(\d+[\.\d]+))?",
            name: "Chrome Mobile",
            version: "$1",
            engine: "WebKit",
            versions: { "28" => "Blink" },
        },
        browser_rule! {
            regex: r"Chromium(?:/(\d+[\.\d]+))?",
            name: "Chromium",
            version: "$1",
            engine: "WebKit",
            versions: { "28" => "Blink" },
        },
        browser_rule! {
            regex: r"Chrome(?:/(\d+[\.\d]+))?",
            name: "Chrome",
            version: "$1",
            engine: "WebKit",
            versions: { "28" => "Blink" },
        },
    ]
}

fn rules_firefox() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"FxiOS/(\d+[\.\d]+)",
            name: "Firefox Mobile iOS",
            version: "$1",
            engine: "WebKit",
        },
        browser_rule! {
            regex: r"Focus/(\d+[\.\d]+)",
            name: "Firefox Focus",
            version: "$1",
        },
        browser_rule! {
            regex: r"PaleMoon(?:/(\d+[\.\d]+))?",
            name: "Pale Moon",
            version: "$1",
            engine: "Gecko",
            versions: { "27" => "Goanna" },
        },
        browser_rule! {
            regex: r"Waterfox(?:/(\d+[\.\d]+))?",
            name: "Waterfox",
            version: "$1",
            engine: "Gecko",
        },
        browser_rule! {
            regex: r"Iceweasel(?:/(\d+[\.\d]+))?",
            name: "Iceweasel",
            version: "$1",
            engine: "Gecko",
        },
        browser_rule! {
            regex: r"(?:Mobile|Tablet);.+Firefox/(\d+[\.\d]+)",
            name: "Firefox Mobile",
            version: "$1",
            engine: "Gecko",
        },
        browser_rule! {
            regex: r"Firefox(?:/(\d+[\.\d]+))?",
            name: "Firefox",
            version: "$1",
            engine: "Gecko",
        },
    ]
}

fn rules_internet_explorer() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"IEMobile[ /](\d+[\.\d]+)",
            name: "IE Mobile",
            version: "$1",
            engine: "Trident",
        },
        // IE 11 dropped the MSIE token
        browser_rule! {
            regex: r"Trident/7\.0.*rv:(\d+[\.\d]+)",
            name: "Internet Explorer",
            version: "$1",
            engine: "Trident",
        },
        browser_rule! {
            regex: r"MSIE (\d+[\.\d]+)",
            name: "Internet Explorer",
            version: "$1",
            engine: "Trident",
        },
    ]
}

fn rules_webkit() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"Konqueror(?:/(\d+[\.\d]+))?",
            name: "Konqueror",
            version: "$1",
            engine: "KHTML",
        },
        browser_rule! {
            regex: r"Android.+Version/(\d+[\.\d]+)",
            name: "Android Browser",
            version: "$1",
            engine: "WebKit",
        },
        browser_rule! {
            regex: r"(?:iPod|iPad|iPhone).+Version/(\d+[\.\d]+)",
            name: "Mobile Safari",
            version: "$1",
            engine: "WebKit",
        },
        browser_rule! {
            regex: r"(?:iPod|iPad|iPhone).+AppleWebKit",
            name: "Mobile Safari",
            version: "",
            engine: "WebKit",
        },
        browser_rule! {
            regex: r"Version/(\d+[\.\d]+).*Safari/|Safari/\d+",
            name: "Safari",
            version: "$1",
            engine: "WebKit",
        },
    ]
}

fn rules_misc() -> Vec<Rule> {
    vec![
        browser_rule! {
            regex: r"Lynx(?:/(\d+[\.\d]+))?",
            name: "Lynx",
            version: "$1",
            engine: "Text",
        },
        browser_rule! {
            regex: r"NetSurf(?:/(\d+[\.\d]+))?",
            name: "NetSurf",
            version: "$1",
            engine: "NetSurf",
        },
    ]
}
