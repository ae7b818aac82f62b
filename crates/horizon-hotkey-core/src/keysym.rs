//! Keysym names and values.
//!
//! Names follow the X11 `keysymdef.h` spelling and are case-sensitive, so
//! `a` and `A` are distinct keysyms (both usually live on the same keycode).
//! Besides the named table, any single ASCII letter or digit names itself,
//! and the numeric forms `0x<hex>` and `U<hex>` are accepted.
//!
//! The table covers ASCII and Latin-1, Cyrillic, the TTY, cursor, keypad and
//! modifier keys, and the common XF86 vendor keys. It is not the whole of
//! `keysymdef.h`: keysyms of other scripts (Greek, Arabic, ...) and rarer
//! vendor keys have no name here and are bound as `U<hex>` by code point or
//! `0x<hex>` by value, e.g. `U03B1` for Greek alpha.

use std::fmt;

/// An X keysym value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keysym(pub u32);

/// Keysyms for Unicode code points outside Latin-1 live above this offset.
const UNICODE_OFFSET: u32 = 0x0100_0000;

const NAMED: &[(&str, u32)] = &[
    // Latin-1 punctuation
    ("space", 0x0020),
    ("exclam", 0x0021),
    ("quotedbl", 0x0022),
    ("numbersign", 0x0023),
    ("dollar", 0x0024),
    ("percent", 0x0025),
    ("ampersand", 0x0026),
    ("apostrophe", 0x0027),
    ("parenleft", 0x0028),
    ("parenright", 0x0029),
    ("asterisk", 0x002a),
    ("plus", 0x002b),
    ("comma", 0x002c),
    ("minus", 0x002d),
    ("period", 0x002e),
    ("slash", 0x002f),
    ("colon", 0x003a),
    ("semicolon", 0x003b),
    ("less", 0x003c),
    ("equal", 0x003d),
    ("greater", 0x003e),
    ("question", 0x003f),
    ("at", 0x0040),
    ("bracketleft", 0x005b),
    ("backslash", 0x005c),
    ("bracketright", 0x005d),
    ("asciicircum", 0x005e),
    ("underscore", 0x005f),
    ("grave", 0x0060),
    ("braceleft", 0x007b),
    ("bar", 0x007c),
    ("braceright", 0x007d),
    ("asciitilde", 0x007e),
    // Latin-1 supplement
    ("nobreakspace", 0x00a0),
    ("exclamdown", 0x00a1),
    ("cent", 0x00a2),
    ("sterling", 0x00a3),
    ("currency", 0x00a4),
    ("yen", 0x00a5),
    ("brokenbar", 0x00a6),
    ("section", 0x00a7),
    ("diaeresis", 0x00a8),
    ("copyright", 0x00a9),
    ("ordfeminine", 0x00aa),
    ("guillemotleft", 0x00ab),
    ("notsign", 0x00ac),
    ("hyphen", 0x00ad),
    ("registered", 0x00ae),
    ("macron", 0x00af),
    ("degree", 0x00b0),
    ("plusminus", 0x00b1),
    ("twosuperior", 0x00b2),
    ("threesuperior", 0x00b3),
    ("acute", 0x00b4),
    ("mu", 0x00b5),
    ("paragraph", 0x00b6),
    ("periodcentered", 0x00b7),
    ("cedilla", 0x00b8),
    ("onesuperior", 0x00b9),
    ("masculine", 0x00ba),
    ("guillemotright", 0x00bb),
    ("onequarter", 0x00bc),
    ("onehalf", 0x00bd),
    ("threequarters", 0x00be),
    ("questiondown", 0x00bf),
    ("Agrave", 0x00c0),
    ("Aacute", 0x00c1),
    ("Acircumflex", 0x00c2),
    ("Atilde", 0x00c3),
    ("Adiaeresis", 0x00c4),
    ("Aring", 0x00c5),
    ("AE", 0x00c6),
    ("Ccedilla", 0x00c7),
    ("Egrave", 0x00c8),
    ("Eacute", 0x00c9),
    ("Ecircumflex", 0x00ca),
    ("Ediaeresis", 0x00cb),
    ("Igrave", 0x00cc),
    ("Iacute", 0x00cd),
    ("Icircumflex", 0x00ce),
    ("Idiaeresis", 0x00cf),
    ("ETH", 0x00d0),
    ("Ntilde", 0x00d1),
    ("Ograve", 0x00d2),
    ("Oacute", 0x00d3),
    ("Ocircumflex", 0x00d4),
    ("Otilde", 0x00d5),
    ("Odiaeresis", 0x00d6),
    ("multiply", 0x00d7),
    ("Oslash", 0x00d8),
    ("Ugrave", 0x00d9),
    ("Uacute", 0x00da),
    ("Ucircumflex", 0x00db),
    ("Udiaeresis", 0x00dc),
    ("Yacute", 0x00dd),
    ("THORN", 0x00de),
    ("ssharp", 0x00df),
    ("agrave", 0x00e0),
    ("aacute", 0x00e1),
    ("acircumflex", 0x00e2),
    ("atilde", 0x00e3),
    ("adiaeresis", 0x00e4),
    ("aring", 0x00e5),
    ("ae", 0x00e6),
    ("ccedilla", 0x00e7),
    ("egrave", 0x00e8),
    ("eacute", 0x00e9),
    ("ecircumflex", 0x00ea),
    ("ediaeresis", 0x00eb),
    ("igrave", 0x00ec),
    ("iacute", 0x00ed),
    ("icircumflex", 0x00ee),
    ("idiaeresis", 0x00ef),
    ("eth", 0x00f0),
    ("ntilde", 0x00f1),
    ("ograve", 0x00f2),
    ("oacute", 0x00f3),
    ("ocircumflex", 0x00f4),
    ("otilde", 0x00f5),
    ("odiaeresis", 0x00f6),
    ("division", 0x00f7),
    ("oslash", 0x00f8),
    ("ugrave", 0x00f9),
    ("uacute", 0x00fa),
    ("ucircumflex", 0x00fb),
    ("udiaeresis", 0x00fc),
    ("yacute", 0x00fd),
    ("thorn", 0x00fe),
    ("ydiaeresis", 0x00ff),
    // Cyrillic
    ("Cyrillic_io", 0x06a3),
    ("Cyrillic_IO", 0x06b3),
    ("Cyrillic_yu", 0x06c0),
    ("Cyrillic_a", 0x06c1),
    ("Cyrillic_be", 0x06c2),
    ("Cyrillic_tse", 0x06c3),
    ("Cyrillic_de", 0x06c4),
    ("Cyrillic_ie", 0x06c5),
    ("Cyrillic_ef", 0x06c6),
    ("Cyrillic_ghe", 0x06c7),
    ("Cyrillic_ha", 0x06c8),
    ("Cyrillic_i", 0x06c9),
    ("Cyrillic_shorti", 0x06ca),
    ("Cyrillic_ka", 0x06cb),
    ("Cyrillic_el", 0x06cc),
    ("Cyrillic_em", 0x06cd),
    ("Cyrillic_en", 0x06ce),
    ("Cyrillic_o", 0x06cf),
    ("Cyrillic_pe", 0x06d0),
    ("Cyrillic_ya", 0x06d1),
    ("Cyrillic_er", 0x06d2),
    ("Cyrillic_es", 0x06d3),
    ("Cyrillic_te", 0x06d4),
    ("Cyrillic_u", 0x06d5),
    ("Cyrillic_zhe", 0x06d6),
    ("Cyrillic_ve", 0x06d7),
    ("Cyrillic_softsign", 0x06d8),
    ("Cyrillic_yeru", 0x06d9),
    ("Cyrillic_ze", 0x06da),
    ("Cyrillic_sha", 0x06db),
    ("Cyrillic_e", 0x06dc),
    ("Cyrillic_shcha", 0x06dd),
    ("Cyrillic_che", 0x06de),
    ("Cyrillic_hardsign", 0x06df),
    ("Cyrillic_YU", 0x06e0),
    ("Cyrillic_A", 0x06e1),
    ("Cyrillic_BE", 0x06e2),
    ("Cyrillic_TSE", 0x06e3),
    ("Cyrillic_DE", 0x06e4),
    ("Cyrillic_IE", 0x06e5),
    ("Cyrillic_EF", 0x06e6),
    ("Cyrillic_GHE", 0x06e7),
    ("Cyrillic_HA", 0x06e8),
    ("Cyrillic_I", 0x06e9),
    ("Cyrillic_SHORTI", 0x06ea),
    ("Cyrillic_KA", 0x06eb),
    ("Cyrillic_EL", 0x06ec),
    ("Cyrillic_EM", 0x06ed),
    ("Cyrillic_EN", 0x06ee),
    ("Cyrillic_O", 0x06ef),
    ("Cyrillic_PE", 0x06f0),
    ("Cyrillic_YA", 0x06f1),
    ("Cyrillic_ER", 0x06f2),
    ("Cyrillic_ES", 0x06f3),
    ("Cyrillic_TE", 0x06f4),
    ("Cyrillic_U", 0x06f5),
    ("Cyrillic_ZHE", 0x06f6),
    ("Cyrillic_VE", 0x06f7),
    ("Cyrillic_SOFTSIGN", 0x06f8),
    ("Cyrillic_YERU", 0x06f9),
    ("Cyrillic_ZE", 0x06fa),
    ("Cyrillic_SHA", 0x06fb),
    ("Cyrillic_E", 0x06fc),
    ("Cyrillic_SHCHA", 0x06fd),
    ("Cyrillic_CHE", 0x06fe),
    ("Cyrillic_HARDSIGN", 0x06ff),
    // TTY functions
    ("BackSpace", 0xff08),
    ("Tab", 0xff09),
    ("Linefeed", 0xff0a),
    ("Clear", 0xff0b),
    ("Return", 0xff0d),
    ("Pause", 0xff13),
    ("Scroll_Lock", 0xff14),
    ("Sys_Req", 0xff15),
    ("Escape", 0xff1b),
    ("Delete", 0xffff),
    // Cursor control
    ("Home", 0xff50),
    ("Left", 0xff51),
    ("Up", 0xff52),
    ("Right", 0xff53),
    ("Down", 0xff54),
    ("Prior", 0xff55),
    ("Page_Up", 0xff55),
    ("Next", 0xff56),
    ("Page_Down", 0xff56),
    ("End", 0xff57),
    ("Begin", 0xff58),
    // Misc functions
    ("Select", 0xff60),
    ("Print", 0xff61),
    ("Execute", 0xff62),
    ("Insert", 0xff63),
    ("Undo", 0xff65),
    ("Redo", 0xff66),
    ("Menu", 0xff67),
    ("Find", 0xff68),
    ("Cancel", 0xff69),
    ("Help", 0xff6a),
    ("Break", 0xff6b),
    ("Mode_switch", 0xff7e),
    ("Num_Lock", 0xff7f),
    // Keypad
    ("KP_Space", 0xff80),
    ("KP_Tab", 0xff89),
    ("KP_Enter", 0xff8d),
    ("KP_Home", 0xff95),
    ("KP_Left", 0xff96),
    ("KP_Up", 0xff97),
    ("KP_Right", 0xff98),
    ("KP_Down", 0xff99),
    ("KP_Prior", 0xff9a),
    ("KP_Page_Up", 0xff9a),
    ("KP_Next", 0xff9b),
    ("KP_Page_Down", 0xff9b),
    ("KP_End", 0xff9c),
    ("KP_Begin", 0xff9d),
    ("KP_Insert", 0xff9e),
    ("KP_Delete", 0xff9f),
    ("KP_Multiply", 0xffaa),
    ("KP_Add", 0xffab),
    ("KP_Separator", 0xffac),
    ("KP_Subtract", 0xffad),
    ("KP_Decimal", 0xffae),
    ("KP_Divide", 0xffaf),
    ("KP_0", 0xffb0),
    ("KP_1", 0xffb1),
    ("KP_2", 0xffb2),
    ("KP_3", 0xffb3),
    ("KP_4", 0xffb4),
    ("KP_5", 0xffb5),
    ("KP_6", 0xffb6),
    ("KP_7", 0xffb7),
    ("KP_8", 0xffb8),
    ("KP_9", 0xffb9),
    ("KP_Equal", 0xffbd),
    // Modifier keys
    ("Shift_L", 0xffe1),
    ("Shift_R", 0xffe2),
    ("Control_L", 0xffe3),
    ("Control_R", 0xffe4),
    ("Caps_Lock", 0xffe5),
    ("Shift_Lock", 0xffe6),
    ("Meta_L", 0xffe7),
    ("Meta_R", 0xffe8),
    ("Alt_L", 0xffe9),
    ("Alt_R", 0xffea),
    ("Super_L", 0xffeb),
    ("Super_R", 0xffec),
    ("Hyper_L", 0xffed),
    ("Hyper_R", 0xffee),
    ("ISO_Level3_Shift", 0xfe03),
    // XF86 vendor keys
    ("XF86MonBrightnessUp", 0x1008_ff02),
    ("XF86MonBrightnessDown", 0x1008_ff03),
    ("XF86KbdLightOnOff", 0x1008_ff04),
    ("XF86KbdBrightnessUp", 0x1008_ff05),
    ("XF86KbdBrightnessDown", 0x1008_ff06),
    ("XF86Standby", 0x1008_ff10),
    ("XF86AudioLowerVolume", 0x1008_ff11),
    ("XF86AudioMute", 0x1008_ff12),
    ("XF86AudioRaiseVolume", 0x1008_ff13),
    ("XF86AudioPlay", 0x1008_ff14),
    ("XF86AudioStop", 0x1008_ff15),
    ("XF86AudioPrev", 0x1008_ff16),
    ("XF86AudioNext", 0x1008_ff17),
    ("XF86HomePage", 0x1008_ff18),
    ("XF86Mail", 0x1008_ff19),
    ("XF86Search", 0x1008_ff1b),
    ("XF86AudioRecord", 0x1008_ff1c),
    ("XF86Calculator", 0x1008_ff1d),
    ("XF86Back", 0x1008_ff26),
    ("XF86Forward", 0x1008_ff27),
    ("XF86Refresh", 0x1008_ff29),
    ("XF86PowerOff", 0x1008_ff2a),
    ("XF86WakeUp", 0x1008_ff2b),
    ("XF86Eject", 0x1008_ff2c),
    ("XF86ScreenSaver", 0x1008_ff2d),
    ("XF86WWW", 0x1008_ff2e),
    ("XF86Sleep", 0x1008_ff2f),
    ("XF86Favorites", 0x1008_ff30),
    ("XF86AudioPause", 0x1008_ff31),
    ("XF86AudioMedia", 0x1008_ff32),
    ("XF86MyComputer", 0x1008_ff33),
    ("XF86AudioRewind", 0x1008_ff3e),
    ("XF86Launch0", 0x1008_ff40),
    ("XF86Launch1", 0x1008_ff41),
    ("XF86Launch2", 0x1008_ff42),
    ("XF86Launch3", 0x1008_ff43),
    ("XF86Launch4", 0x1008_ff44),
    ("XF86Launch5", 0x1008_ff45),
    ("XF86Launch6", 0x1008_ff46),
    ("XF86Launch7", 0x1008_ff47),
    ("XF86Launch8", 0x1008_ff48),
    ("XF86Launch9", 0x1008_ff49),
    ("XF86LaunchA", 0x1008_ff4a),
    ("XF86LaunchB", 0x1008_ff4b),
    ("XF86LaunchC", 0x1008_ff4c),
    ("XF86LaunchD", 0x1008_ff4d),
    ("XF86LaunchE", 0x1008_ff4e),
    ("XF86LaunchF", 0x1008_ff4f),
    ("XF86Close", 0x1008_ff56),
    ("XF86Copy", 0x1008_ff57),
    ("XF86Cut", 0x1008_ff58),
    ("XF86Display", 0x1008_ff59),
    ("XF86Documents", 0x1008_ff5b),
    ("XF86Explorer", 0x1008_ff5d),
    ("XF86Paste", 0x1008_ff6d),
    ("XF86Terminal", 0x1008_ff80),
    ("XF86Battery", 0x1008_ff93),
    ("XF86Bluetooth", 0x1008_ff94),
    ("XF86WLAN", 0x1008_ff95),
    ("XF86AudioForward", 0x1008_ff97),
    ("XF86AudioRepeat", 0x1008_ff98),
    ("XF86AudioRandomPlay", 0x1008_ff99),
    ("XF86TouchpadToggle", 0x1008_ffa9),
    ("XF86AudioMicMute", 0x1008_ffb2),
];

/// First and last function-key keysyms (`F1`..`F35`).
const XK_F1: u32 = 0xffbe;
const FUNCTION_KEY_COUNT: u32 = 35;

impl Keysym {
    /// Look up a keysym by name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphanumeric() {
                return Some(Self(c as u32));
            }
        }

        if let Some(entry) = NAMED.iter().find(|(n, _)| *n == name) {
            return Some(Self(entry.1));
        }

        if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u32>().ok()) {
            if (1..=FUNCTION_KEY_COUNT).contains(&n) {
                return Some(Self(XK_F1 + n - 1));
            }
        }

        if let Some(hex) = name.strip_prefix("0x") {
            return u32::from_str_radix(hex, 16).ok().map(Self);
        }

        if let Some(hex) = name.strip_prefix('U') {
            let cp = u32::from_str_radix(hex, 16).ok()?;
            return char::from_u32(cp).map(Self::from_char);
        }

        None
    }

    /// The keysym for a Unicode character.
    pub fn from_char(c: char) -> Self {
        let cp = c as u32;
        match cp {
            0x20..=0x7e | 0xa0..=0xff => Self(cp),
            _ => Self(UNICODE_OFFSET | cp),
        }
    }

    /// The raw keysym value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}
