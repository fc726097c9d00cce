//! Built-in browser catalog, family table and mobile-only set.
//!
//! Pure data. Order matters for the family table: when a short code shows up in
//! more than one family, the first family listed wins.

/// Known browsers: `(short code, display name)`.
pub(crate) const AVAILABLE_BROWSERS: &[(&str, &str)] = &[
    ("1B", "115 Browser"),
    ("2B", "2345 Browser"),
    ("36", "360 Phone Browser"),
    ("3B", "360 Browser"),
    ("AA", "Avant Browser"),
    ("AB", "ABrowse"),
    ("AF", "ANT Fresco"),
    ("AG", "ANTGalio"),
    ("AL", "Aloha Browser"),
    ("AH", "Aloha Browser Lite"),
    ("AM", "Amaya"),
    ("AO", "Amigo"),
    ("AN", "Android Browser"),
    ("AE", "AOL Desktop"),
    ("AD", "AOL Shield"),
    ("AR", "Arora"),
    ("AX", "Arctic Fox"),
    ("AV", "Amiga Voyager"),
    ("AW", "Amiga Aweb"),
    ("A0", "Atom"),
    ("AT", "Atomic Web Browser"),
    ("AS", "Avast Secure Browser"),
    ("VG", "AVG Secure Browser"),
    ("BA", "Beaker Browser"),
    ("BM", "Beamrise"),
    ("BB", "BlackBerry Browser"),
    ("BD", "Baidu Browser"),
    ("BS", "Baidu Spark"),
    ("BI", "Basilisk"),
    ("BE", "Beonex"),
    ("BH", "BlackHawk"),
    ("BJ", "Bunjalloo"),
    ("BL", "B-Line"),
    ("BU", "Blue Browser"),
    ("BN", "Borealis Navigator"),
    ("BR", "Brave"),
    ("BK", "BriskBard"),
    ("BX", "BrowseX"),
    ("BZ", "Browzar"),
    ("CA", "Camino"),
    ("CL", "CCleaner"),
    ("C0", "Centaury"),
    ("CC", "Coc Coc"),
    ("C2", "Colibri"),
    ("CD", "Comodo Dragon"),
    ("C1", "Coast"),
    ("CX", "Charon"),
    ("CE", "CM Browser"),
    ("CF", "Chrome Frame"),
    ("HC", "Headless Chrome"),
    ("CH", "Chrome"),
    ("CI", "Chrome Mobile iOS"),
    ("CK", "Conkeror"),
    ("CM", "Chrome Mobile"),
    ("CN", "CoolNovo"),
    ("CO", "CometBird"),
    ("CB", "COS Browser"),
    ("CP", "ChromePlus"),
    ("CR", "Chromium"),
    ("CY", "Cyberfox"),
    ("CS", "Cheshire"),
    ("CT", "Crusta"),
    ("CZ", "Crazy Browser"),
    ("CU", "Cunaguaro"),
    ("CV", "Chrome Webview"),
    ("DB", "dbrowser"),
    ("DE", "Deepnet Explorer"),
    ("DT", "Delta Browser"),
    ("DF", "Dolphin"),
    ("DO", "Dorado"),
    ("DL", "Dooble"),
    ("DI", "Dillo"),
    ("DD", "DuckDuckGo Privacy Browser"),
    ("EC", "Ecosia"),
    ("EI", "Epic"),
    ("EL", "Elinks"),
    ("EB", "Element Browser"),
    ("EE", "Elements Browser"),
    ("EZ", "eZ Browser"),
    ("EU", "EUI Browser"),
    ("EP", "GNOME Web"),
    ("ES", "Espial TV Browser"),
    ("FA", "Falkon"),
    ("FX", "Faux Browser"),
    ("F1", "Firefox Mobile iOS"),
    ("FB", "Firebird"),
    ("FD", "Fluid"),
    ("FE", "Fennec"),
    ("FF", "Firefox"),
    ("FK", "Firefox Focus"),
    ("FY", "Firefox Reality"),
    ("FR", "Firefox Rocket"),
    ("FL", "Flock"),
    ("FM", "Firefox Mobile"),
    ("FW", "Fireweb"),
    ("FN", "Fireweb Navigator"),
    ("FU", "FreeU"),
    ("GA", "Galeon"),
    ("GH", "Ghostery Privacy Browser"),
    ("GB", "Glass Browser"),
    ("GE", "Google Earth"),
    ("GO", "GOG Galaxy"),
    ("HA", "Hawk Turbo Browser"),
    ("HO", "hola! Browser"),
    ("HJ", "HotJava"),
    ("HU", "Huawei Browser"),
    ("IB", "IBrowse"),
    ("IC", "iCab"),
    ("I2", "iCab Mobile"),
    ("I1", "Iridium"),
    ("I3", "Iron Mobile"),
    ("I4", "IceCat"),
    ("ID", "IceDragon"),
    ("IV", "Isivioo"),
    ("IW", "Iceweasel"),
    ("IE", "Internet Explorer"),
    ("IM", "IE Mobile"),
    ("IR", "Iron"),
    ("JB", "Japan Browser"),
    ("JS", "Jasmine"),
    ("JI", "Jig Browser"),
    ("JP", "Jig Browser Plus"),
    ("JO", "Jio Browser"),
    ("KB", "K.Browser"),
    ("KI", "Kindle Browser"),
    ("KM", "K-meleon"),
    ("KO", "Konqueror"),
    ("KP", "Kapiko"),
    ("KN", "Kinza"),
    ("KW", "Kiwi"),
    ("KD", "Kode Browser"),
    ("KY", "Kylo"),
    ("KZ", "Kazehakase"),
    ("LB", "Cheetah Browser"),
    ("LF", "LieBaoFast"),
    ("LG", "LG Browser"),
    ("LH", "Light"),
    ("LI", "Links"),
    ("LO", "Lovense Browser"),
    ("LU", "LuaKit"),
    ("LL", "Lulumi"),
    ("LS", "Lunascape"),
    ("LN", "Lunascape Lite"),
    ("LX", "Lynx"),
    ("M1", "mCent"),
    ("MB", "MicroB"),
    ("MC", "NCSA Mosaic"),
    ("MZ", "Meizu Browser"),
    ("ME", "Mercury"),
    ("MF", "Mobile Safari"),
    ("MI", "Midori"),
    ("MO", "Mobicip"),
    ("MU", "MIUI Browser"),
    ("MS", "Mobile Silk"),
    ("MN", "Minimo"),
    ("MT", "Mint Browser"),
    ("MX", "Maxthon"),
    ("NM", "MxNitro"),
    ("MY", "Mypal"),
    ("MR", "Monument Browser"),
    ("MW", "MAUI WAP Browser"),
    ("NR", "NFS Browser"),
    ("NB", "Nokia Browser"),
    ("NO", "Nokia OSS Browser"),
    ("NV", "Nokia Ovi Browser"),
    ("NX", "Nox Browser"),
    ("NE", "NetSurf"),
    ("NF", "NetFront"),
    ("NL", "NetFront Life"),
    ("NP", "NetPositive"),
    ("NS", "Netscape"),
    ("NT", "NTENT Browser"),
    ("OC", "Oculus Browser"),
    ("O1", "Opera Mini iOS"),
    ("OB", "Obigo"),
    ("OD", "Odyssey Web Browser"),
    ("OF", "Off By One"),
    ("HH", "OhHai Browser"),
    ("OE", "ONE Browser"),
    ("OX", "Opera GX"),
    ("OG", "Opera Neon"),
    ("OH", "Opera Devices"),
    ("OI", "Opera Mini"),
    ("OM", "Opera Mobile"),
    ("OP", "Opera"),
    ("ON", "Opera Next"),
    ("OO", "Opera Touch"),
    ("OS", "Ordissimo"),
    ("OR", "Oregano"),
    ("O0", "Origin In-Game Overlay"),
    ("OY", "Origyn Web Browser"),
    ("OV", "Openwave Mobile Browser"),
    ("OW", "OmniWeb"),
    ("OT", "Otter Browser"),
    ("PL", "Palm Blazer"),
    ("PM", "Pale Moon"),
    ("PY", "Polypane"),
    ("PP", "Oppo Browser"),
    ("PR", "Palm Pre"),
    ("PU", "Puffin"),
    ("PW", "Palm WebPro"),
    ("PA", "Palmscape"),
    ("PX", "Phoenix"),
    ("PB", "Phoenix Browser"),
    ("PO", "Polaris"),
    ("PT", "Polarity"),
    ("PI", "PrivacyWall"),
    ("PS", "Microsoft Edge"),
    ("Q1", "QQ Browser Mini"),
    ("QQ", "QQ Browser"),
    ("QT", "Qutebrowser"),
    ("QU", "Quark"),
    ("QZ", "QupZilla"),
    ("QM", "Qwant Mobile"),
    ("QW", "QtWebEngine"),
    ("RE", "Realme Browser"),
    ("RK", "Rekonq"),
    ("RM", "RockMelt"),
    ("SB", "Samsung Browser"),
    ("SA", "Sailfish Browser"),
    ("S8", "Seewo Browser"),
    ("SC", "SEMC-Browser"),
    ("SE", "Sogou Explorer"),
    ("SF", "Safari"),
    ("S5", "Safe Exam Browser"),
    ("SW", "SalamWeb"),
    ("SH", "Shiira"),
    ("S1", "SimpleBrowser"),
    ("SY", "Sizzy"),
    ("SK", "Skyfire"),
    ("SS", "Seraphic Sraf"),
    ("SL", "Sleipnir"),
    ("S6", "Slimjet"),
    ("7S", "7Star"),
    ("LE", "Smart Lenovo Browser"),
    ("SN", "Snowshoe"),
    ("SO", "Sogou Mobile Browser"),
    ("S2", "Splash"),
    ("SI", "Sputnik Browser"),
    ("SR", "Sunrise"),
    ("SP", "SuperBird"),
    ("SU", "Super Fast Browser"),
    ("S3", "surf"),
    ("SG", "Stargon"),
    ("S0", "START Internet Browser"),
    ("S4", "Steam In-Game Overlay"),
    ("ST", "Streamy"),
    ("SX", "Swiftfox"),
    ("SZ", "Seznam Browser"),
    ("TO", "t-online.de Browser"),
    ("TA", "Tao Browser"),
    ("TF", "TenFourFox"),
    ("TB", "Tenta Browser"),
    ("TZ", "Tizen Browser"),
    ("TU", "Tungsten"),
    ("TG", "ToGate"),
    ("TS", "TweakStyle"),
    ("TV", "TV Bro"),
    ("UB", "UBrowser"),
    ("UC", "UC Browser"),
    ("UM", "UC Browser Mini"),
    ("UT", "UC Browser Turbo"),
    ("UR", "UR Browser"),
    ("UZ", "Uzbl"),
    ("VI", "Vivaldi"),
    ("VV", "vivo Browser"),
    ("VB", "Vision Mobile Browser"),
    ("VM", "VMware AirWatch"),
    ("WI", "Wear Internet Browser"),
    ("WP", "Web Explorer"),
    ("WE", "WebPositive"),
    ("WF", "Waterfox"),
    ("WH", "Whale Browser"),
    ("WO", "wOSBrowser"),
    ("WT", "WeTab Browser"),
    ("YJ", "Yahoo! Japan Browser"),
    ("YA", "Yandex Browser"),
    ("YL", "Yandex Browser Lite"),
    ("YN", "Yaani Browser"),
    ("YB", "Yolo Browser"),
    ("XI", "Xiino"),
    ("XV", "Xvast"),
    ("ZV", "Zvu"),
];

/// Browser families: `(family name, member short codes)`.
pub(crate) const BROWSER_FAMILIES: &[(&str, &[&str])] = &[
    ("Android Browser", &["AN", "MU"]),
    ("BlackBerry Browser", &["BB"]),
    ("Baidu", &["BD", "BS"]),
    ("Amiga", &["AV", "AW"]),
    (
        "Chrome",
        &[
            "CH", "BA", "BR", "CC", "CD", "CM", "CI", "CF", "CN", "CR", "CP", "DD", "IR", "RM", "AO", "TS", "VI", "PT",
            "AS", "TB", "AD", "SB", "WP", "I3", "CV", "WH", "SZ", "QW", "LF", "KW", "2B", "CE", "EC", "MT", "MS", "HA",
            "OC", "MZ", "BM", "KN", "SW", "M1", "FA", "TA", "AH", "CL", "SU", "EU", "UB", "LO", "VG", "TV", "A0", "1B",
            "S4", "EE", "AE", "VM", "O0", "TG", "GB", "SY", "HH", "YJ", "LL", "TU", "XV", "C2", "QU", "YN", "JB", "MR",
            "S6", "7S", "NM", "PB", "UR", "NR", "SG", "S8",
        ],
    ),
    (
        "Firefox",
        &[
            "FF", "FE", "FM", "SX", "FB", "PX", "MB", "EI", "WF", "CU", "TF", "QM", "FR", "I4", "GZ", "MO", "F1", "BI",
            "MN", "BH", "TO", "OS", "MY", "FY", "AX", "C0", "LH", "S5", "ZV", "IW", "PI", "BN",
        ],
    ),
    ("Internet Explorer", &["IE", "IM", "PS", "CZ", "BZ"]),
    ("Konqueror", &["KO"]),
    ("NetFront", &["NF"]),
    ("NetSurf", &["NE"]),
    ("Nokia Browser", &["NB", "NO", "NV", "DO"]),
    ("Opera", &["OP", "OM", "OI", "ON", "OO", "OG", "OH", "O1", "OX"]),
    ("Safari", &["SF", "MF", "SO"]),
    ("Sailfish Browser", &["SA"]),
];

/// Browsers that only exist on mobile platforms (short codes).
pub(crate) const MOBILE_ONLY_BROWSERS: &[&str] = &[
    "36", "OC", "PU", "SK", "MF", "OI", "OM", "DD", "DB", "ST", "BL", "IV", "FM", "C1", "AL", "SA", "SB", "FR", "WP",
    "HA", "NX", "HU", "VV", "RE", "CB", "MZ", "UM", "FK", "FX", "WI", "MN", "M1", "AH", "SU", "EU", "EZ", "UT", "DT",
    "S0", "QU", "YN", "JB", "GH", "PI", "SG", "KD",
];
