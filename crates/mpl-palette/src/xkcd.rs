// SPDX-License-Identifier: MIT
//
// The extended table — a trimmed snapshot of the community "xkcd" color
// survey, most common names first (the survey's natural order).

use crate::table::Entry;

pub const XKCD_COLORS: &[Entry] = &[
    ("xkcd:purple", "#7e1e9c"),
    ("xkcd:green", "#15b01a"),
    ("xkcd:blue", "#0343df"),
    ("xkcd:pink", "#ff81c0"),
    ("xkcd:brown", "#653700"),
    ("xkcd:red", "#e50000"),
    ("xkcd:light blue", "#95d0fc"),
    ("xkcd:teal", "#029386"),
    ("xkcd:orange", "#f97306"),
    ("xkcd:light green", "#96f97b"),
    ("xkcd:magenta", "#c20078"),
    ("xkcd:yellow", "#ffff14"),
    ("xkcd:sky blue", "#75bbfd"),
    ("xkcd:grey", "#929591"),
    ("xkcd:lime green", "#89fe05"),
    ("xkcd:light purple", "#bf77f6"),
    ("xkcd:violet", "#9a0eea"),
    ("xkcd:dark green", "#033500"),
    ("xkcd:turquoise", "#06c2ac"),
    ("xkcd:lavender", "#c79fef"),
    ("xkcd:dark blue", "#00035b"),
    ("xkcd:tan", "#d1b26f"),
    ("xkcd:cyan", "#00ffff"),
    ("xkcd:aqua", "#13eac9"),
    ("xkcd:forest green", "#06470c"),
    ("xkcd:mauve", "#ae7181"),
    ("xkcd:dark purple", "#35063e"),
    ("xkcd:bright green", "#01ff07"),
    ("xkcd:maroon", "#650021"),
    ("xkcd:olive", "#6e750e"),
    ("xkcd:salmon", "#ff796c"),
    ("xkcd:beige", "#e6daa6"),
    ("xkcd:royal blue", "#0504aa"),
    ("xkcd:navy blue", "#001146"),
    ("xkcd:lilac", "#cea2fd"),
    ("xkcd:black", "#000000"),
    ("xkcd:hot pink", "#ff028d"),
    ("xkcd:light brown", "#ad8150"),
    ("xkcd:pale green", "#c7fdb5"),
    ("xkcd:peach", "#ffb07c"),
    ("xkcd:olive green", "#677a04"),
    ("xkcd:dark pink", "#cb416b"),
    ("xkcd:periwinkle", "#8e82fe"),
    ("xkcd:sea green", "#53fca1"),
    ("xkcd:lime", "#aaff32"),
    ("xkcd:indigo", "#380282"),
    ("xkcd:mustard", "#ceb301"),
    ("xkcd:light pink", "#ffd1df"),
    ("xkcd:rose", "#cf6275"),
    ("xkcd:bright blue", "#0165fc"),
    ("xkcd:neon green", "#0cff0c"),
    ("xkcd:burnt orange", "#c04e01"),
    ("xkcd:aquamarine", "#04d8b2"),
    ("xkcd:navy", "#01153e"),
    ("xkcd:grass green", "#3f9b0b"),
    ("xkcd:dark red", "#840000"),
    ("xkcd:deep blue", "#040273"),
    ("xkcd:coral", "#fc5a50"),
    ("xkcd:gold", "#dbb40c"),
    ("xkcd:cream", "#ffffc2"),
    ("xkcd:bright purple", "#be03fd"),
    ("xkcd:baby blue", "#a2cffe"),
    ("xkcd:mint", "#9ffeb0"),
    ("xkcd:tangerine", "#ff9408"),
    ("xkcd:sand", "#e2ca76"),
    ("xkcd:brick", "#a03623"),
    ("xkcd:dark teal", "#014d4e"),
    ("xkcd:slate", "#516572"),
    ("xkcd:light orange", "#fdaa48"),
    ("xkcd:burgundy", "#610023"),
    ("xkcd:goldenrod", "#fac205"),
    ("xkcd:pale blue", "#d0fefe"),
    ("xkcd:khaki", "#aaa662"),
    ("xkcd:dark grey", "#363737"),
    ("xkcd:light grey", "#d8dcd6"),
    ("xkcd:white", "#ffffff"),
    ("xkcd:crimson", "#8c000f"),
    ("xkcd:eggplant", "#380835"),
    ("xkcd:dark orange", "#c65102"),
    ("xkcd:plum", "#580f41"),
    ("xkcd:pine green", "#0a481e"),
    ("xkcd:sky", "#82cafc"),
    ("xkcd:steel blue", "#5a7d9a"),
    ("xkcd:chocolate", "#3d1c02"),
    ("xkcd:charcoal", "#343837"),
    ("xkcd:light yellow", "#fffe7a"),
    ("xkcd:chartreuse", "#c1f80a"),
    ("xkcd:scarlet", "#be0119"),
    ("xkcd:wine", "#80013f"),
    ("xkcd:peacock blue", "#016795"),
    ("xkcd:leaf green", "#5ca904"),
    ("xkcd:fuchsia", "#ed0dd9"),
    ("xkcd:cobalt", "#1e488f"),
    ("xkcd:midnight blue", "#020035"),
    ("xkcd:rust", "#a83c09"),
    ("xkcd:light red", "#ff474c"),
    ("xkcd:cerulean", "#0485d1"),
    ("xkcd:pale pink", "#ffcfdc"),
    ("xkcd:deep purple", "#36013f"),
    ("xkcd:banana", "#ffff7e"),
    ("xkcd:dusty rose", "#c0737a"),
    ("xkcd:ocean blue", "#03719c"),
    ("xkcd:sage", "#87ae73"),
    ("xkcd:sienna", "#a9561e"),
    ("xkcd:bright red", "#ff000d"),
    ("xkcd:azure", "#069af3"),
    ("xkcd:dark yellow", "#d5b60a"),
    ("xkcd:lemon", "#fdff52"),
    ("xkcd:denim", "#3b638c"),
    ("xkcd:emerald", "#01a049"),
    ("xkcd:seafoam", "#80f9ad"),
    ("xkcd:ivory", "#ffffcb"),
    ("xkcd:brick red", "#8f1402"),
    ("xkcd:slate blue", "#5b7c99"),
    ("xkcd:moss green", "#658b38"),
    ("xkcd:taupe", "#b9a281"),
    ("xkcd:ochre", "#bf9005"),
    ("xkcd:pumpkin", "#e17701"),
    ("xkcd:terracotta", "#ca6641"),
    ("xkcd:mustard yellow", "#d2bd0a"),
    ("xkcd:grape", "#6c3461"),
    ("xkcd:jade", "#1fa774"),
    ("xkcd:apricot", "#ffb16d"),
    ("xkcd:wheat", "#fbdd7e"),
    ("xkcd:avocado", "#90b134"),
    ("xkcd:pistachio", "#c0fa8b"),
    ("xkcd:blush", "#f29e8e"),
    ("xkcd:sapphire", "#2138ab"),
    ("xkcd:eggshell", "#ffffd4"),
    ("xkcd:raspberry", "#b00149"),
    ("xkcd:coffee", "#a6814c"),
    ("xkcd:copper", "#b66325"),
    ("xkcd:pastel pink", "#ffbacd"),
    ("xkcd:powder blue", "#b1d1fc"),
    ("xkcd:marigold", "#fcc006"),
    ("xkcd:cranberry", "#9e003a"),
    ("xkcd:blue grey", "#607c8e"),
    ("xkcd:ruby", "#ca0147"),
];
