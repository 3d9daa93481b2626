//! Item type codes and the optional sections each type carries.

use std::borrow::Cow;

/// Broad item category; decides which extended sections are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeKind {
    /// Has defense and durability.
    Armor,
    /// Has durability.
    Weapon,
    Misc,
}

/// One entry of the item type table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTypeDef {
    /// Type code without padding, e.g. `"hp1"`.
    pub code: Cow<'static, str>,
    pub kind: TypeKind,
    /// Carries a 9-bit quantity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stackable: bool,
    /// Carries 5 bits of tome data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tome: bool,
}

impl ItemTypeDef {
    const fn base(code: &'static str, kind: TypeKind, stackable: bool, tome: bool) -> Self {
        Self {
            code: Cow::Borrowed(code),
            kind,
            stackable,
            tome,
        }
    }

    #[must_use]
    pub const fn armor(code: &'static str) -> Self {
        Self::base(code, TypeKind::Armor, false, false)
    }

    #[must_use]
    pub const fn weapon(code: &'static str) -> Self {
        Self::base(code, TypeKind::Weapon, false, false)
    }

    #[must_use]
    pub const fn stackable_weapon(code: &'static str) -> Self {
        Self::base(code, TypeKind::Weapon, true, false)
    }

    #[must_use]
    pub const fn misc(code: &'static str) -> Self {
        Self::base(code, TypeKind::Misc, false, false)
    }

    #[must_use]
    pub const fn stackable_misc(code: &'static str) -> Self {
        Self::base(code, TypeKind::Misc, true, false)
    }

    /// Tomes are stackable misc items with extra tome data.
    #[must_use]
    pub const fn tome(code: &'static str) -> Self {
        Self::base(code, TypeKind::Misc, true, true)
    }

    /// Treatment for codes missing from the table.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::base("", TypeKind::Misc, false, false)
    }

    #[must_use]
    pub const fn is_armor(&self) -> bool {
        matches!(self.kind, TypeKind::Armor)
    }

    /// Armor and weapons carry durability.
    #[must_use]
    pub const fn has_durability(&self) -> bool {
        matches!(self.kind, TypeKind::Armor | TypeKind::Weapon)
    }
}

pub(crate) static ITEM_TYPES: [ItemTypeDef; 638] = [
    // helms
    ItemTypeDef::armor("cap"),
    ItemTypeDef::armor("skp"),
    ItemTypeDef::armor("hlm"),
    ItemTypeDef::armor("fhl"),
    ItemTypeDef::armor("ghm"),
    ItemTypeDef::armor("crn"),
    ItemTypeDef::armor("msk"),
    ItemTypeDef::armor("xap"),
    ItemTypeDef::armor("xkp"),
    ItemTypeDef::armor("xlm"),
    ItemTypeDef::armor("xhl"),
    ItemTypeDef::armor("xhm"),
    ItemTypeDef::armor("xrn"),
    ItemTypeDef::armor("xsk"),
    ItemTypeDef::armor("uap"),
    ItemTypeDef::armor("ukp"),
    ItemTypeDef::armor("ulm"),
    ItemTypeDef::armor("uhl"),
    ItemTypeDef::armor("uhm"),
    ItemTypeDef::armor("urn"),
    ItemTypeDef::armor("usk"),
    ItemTypeDef::armor("ci0"),
    ItemTypeDef::armor("ci1"),
    ItemTypeDef::armor("ci2"),
    ItemTypeDef::armor("ci3"),
    // body armor
    ItemTypeDef::armor("qui"),
    ItemTypeDef::armor("lea"),
    ItemTypeDef::armor("hla"),
    ItemTypeDef::armor("stu"),
    ItemTypeDef::armor("rng"),
    ItemTypeDef::armor("scl"),
    ItemTypeDef::armor("chn"),
    ItemTypeDef::armor("brs"),
    ItemTypeDef::armor("spl"),
    ItemTypeDef::armor("plt"),
    ItemTypeDef::armor("fld"),
    ItemTypeDef::armor("gth"),
    ItemTypeDef::armor("ful"),
    ItemTypeDef::armor("aar"),
    ItemTypeDef::armor("ltp"),
    ItemTypeDef::armor("xui"),
    ItemTypeDef::armor("xea"),
    ItemTypeDef::armor("xla"),
    ItemTypeDef::armor("xtu"),
    ItemTypeDef::armor("xng"),
    ItemTypeDef::armor("xcl"),
    ItemTypeDef::armor("xhn"),
    ItemTypeDef::armor("xrs"),
    ItemTypeDef::armor("xpl"),
    ItemTypeDef::armor("xlt"),
    ItemTypeDef::armor("xld"),
    ItemTypeDef::armor("xth"),
    ItemTypeDef::armor("xul"),
    ItemTypeDef::armor("xar"),
    ItemTypeDef::armor("xtp"),
    ItemTypeDef::armor("uui"),
    ItemTypeDef::armor("uea"),
    ItemTypeDef::armor("ula"),
    ItemTypeDef::armor("utu"),
    ItemTypeDef::armor("ung"),
    ItemTypeDef::armor("ucl"),
    ItemTypeDef::armor("uhn"),
    ItemTypeDef::armor("urs"),
    ItemTypeDef::armor("upl"),
    ItemTypeDef::armor("ult"),
    ItemTypeDef::armor("uld"),
    ItemTypeDef::armor("uth"),
    ItemTypeDef::armor("uul"),
    ItemTypeDef::armor("uar"),
    ItemTypeDef::armor("utp"),
    // shields
    ItemTypeDef::armor("buc"),
    ItemTypeDef::armor("sml"),
    ItemTypeDef::armor("lrg"),
    ItemTypeDef::armor("kit"),
    ItemTypeDef::armor("tow"),
    ItemTypeDef::armor("gts"),
    ItemTypeDef::armor("bsh"),
    ItemTypeDef::armor("spk"),
    ItemTypeDef::armor("xuc"),
    ItemTypeDef::armor("xml"),
    ItemTypeDef::armor("xrg"),
    ItemTypeDef::armor("xit"),
    ItemTypeDef::armor("xow"),
    ItemTypeDef::armor("xts"),
    ItemTypeDef::armor("xsh"),
    ItemTypeDef::armor("xpk"),
    ItemTypeDef::armor("uuc"),
    ItemTypeDef::armor("uml"),
    ItemTypeDef::armor("urg"),
    ItemTypeDef::armor("uit"),
    ItemTypeDef::armor("uow"),
    ItemTypeDef::armor("uts"),
    ItemTypeDef::armor("ush"),
    ItemTypeDef::armor("upk"),
    // gloves
    ItemTypeDef::armor("lgl"),
    ItemTypeDef::armor("vgl"),
    ItemTypeDef::armor("mgl"),
    ItemTypeDef::armor("tgl"),
    ItemTypeDef::armor("hgl"),
    ItemTypeDef::armor("xlg"),
    ItemTypeDef::armor("xvg"),
    ItemTypeDef::armor("xmg"),
    ItemTypeDef::armor("xtg"),
    ItemTypeDef::armor("xhg"),
    ItemTypeDef::armor("ulg"),
    ItemTypeDef::armor("uvg"),
    ItemTypeDef::armor("umg"),
    ItemTypeDef::armor("utg"),
    ItemTypeDef::armor("uhg"),
    // boots
    ItemTypeDef::armor("lbt"),
    ItemTypeDef::armor("vbt"),
    ItemTypeDef::armor("mbt"),
    ItemTypeDef::armor("tbt"),
    ItemTypeDef::armor("hbt"),
    ItemTypeDef::armor("xlb"),
    ItemTypeDef::armor("xvb"),
    ItemTypeDef::armor("xmb"),
    ItemTypeDef::armor("xtb"),
    ItemTypeDef::armor("xhb"),
    ItemTypeDef::armor("ulb"),
    ItemTypeDef::armor("uvb"),
    ItemTypeDef::armor("umb"),
    ItemTypeDef::armor("utb"),
    ItemTypeDef::armor("uhb"),
    // belts
    ItemTypeDef::armor("lbl"),
    ItemTypeDef::armor("vbl"),
    ItemTypeDef::armor("mbl"),
    ItemTypeDef::armor("tbl"),
    ItemTypeDef::armor("hbl"),
    ItemTypeDef::armor("zlb"),
    ItemTypeDef::armor("zvb"),
    ItemTypeDef::armor("zmb"),
    ItemTypeDef::armor("ztb"),
    ItemTypeDef::armor("zhb"),
    ItemTypeDef::armor("ulc"),
    ItemTypeDef::armor("uvc"),
    ItemTypeDef::armor("umc"),
    ItemTypeDef::armor("utc"),
    ItemTypeDef::armor("uhc"),
    // class armor
    ItemTypeDef::armor("bhm"),
    ItemTypeDef::armor("xh9"),
    ItemTypeDef::armor("uh9"),
    ItemTypeDef::armor("dr1"),
    ItemTypeDef::armor("dr2"),
    ItemTypeDef::armor("dr3"),
    ItemTypeDef::armor("dr4"),
    ItemTypeDef::armor("dr5"),
    ItemTypeDef::armor("dr6"),
    ItemTypeDef::armor("dr7"),
    ItemTypeDef::armor("dr8"),
    ItemTypeDef::armor("dr9"),
    ItemTypeDef::armor("dra"),
    ItemTypeDef::armor("drb"),
    ItemTypeDef::armor("drc"),
    ItemTypeDef::armor("drd"),
    ItemTypeDef::armor("dre"),
    ItemTypeDef::armor("drf"),
    ItemTypeDef::armor("ba1"),
    ItemTypeDef::armor("ba2"),
    ItemTypeDef::armor("ba3"),
    ItemTypeDef::armor("ba4"),
    ItemTypeDef::armor("ba5"),
    ItemTypeDef::armor("ba6"),
    ItemTypeDef::armor("ba7"),
    ItemTypeDef::armor("ba8"),
    ItemTypeDef::armor("ba9"),
    ItemTypeDef::armor("baa"),
    ItemTypeDef::armor("bab"),
    ItemTypeDef::armor("bac"),
    ItemTypeDef::armor("bad"),
    ItemTypeDef::armor("bae"),
    ItemTypeDef::armor("baf"),
    ItemTypeDef::armor("pa1"),
    ItemTypeDef::armor("pa2"),
    ItemTypeDef::armor("pa3"),
    ItemTypeDef::armor("pa4"),
    ItemTypeDef::armor("pa5"),
    ItemTypeDef::armor("pa6"),
    ItemTypeDef::armor("pa7"),
    ItemTypeDef::armor("pa8"),
    ItemTypeDef::armor("pa9"),
    ItemTypeDef::armor("paa"),
    ItemTypeDef::armor("pab"),
    ItemTypeDef::armor("pac"),
    ItemTypeDef::armor("pad"),
    ItemTypeDef::armor("pae"),
    ItemTypeDef::armor("paf"),
    ItemTypeDef::armor("ne1"),
    ItemTypeDef::armor("ne2"),
    ItemTypeDef::armor("ne3"),
    ItemTypeDef::armor("ne4"),
    ItemTypeDef::armor("ne5"),
    ItemTypeDef::armor("ne6"),
    ItemTypeDef::armor("ne7"),
    ItemTypeDef::armor("ne8"),
    ItemTypeDef::armor("ne9"),
    ItemTypeDef::armor("nea"),
    ItemTypeDef::armor("neb"),
    ItemTypeDef::armor("nec"),
    ItemTypeDef::armor("ned"),
    ItemTypeDef::armor("nee"),
    ItemTypeDef::armor("nef"),
    // axes
    ItemTypeDef::weapon("hax"),
    ItemTypeDef::weapon("axe"),
    ItemTypeDef::weapon("2ax"),
    ItemTypeDef::weapon("mpi"),
    ItemTypeDef::weapon("wax"),
    ItemTypeDef::weapon("lax"),
    ItemTypeDef::weapon("bax"),
    ItemTypeDef::weapon("btx"),
    ItemTypeDef::weapon("gax"),
    ItemTypeDef::weapon("gix"),
    ItemTypeDef::weapon("9ha"),
    ItemTypeDef::weapon("9ax"),
    ItemTypeDef::weapon("92a"),
    ItemTypeDef::weapon("9mp"),
    ItemTypeDef::weapon("9wa"),
    ItemTypeDef::weapon("9la"),
    ItemTypeDef::weapon("9ba"),
    ItemTypeDef::weapon("9bt"),
    ItemTypeDef::weapon("9ga"),
    ItemTypeDef::weapon("9gi"),
    ItemTypeDef::weapon("7ha"),
    ItemTypeDef::weapon("7ax"),
    ItemTypeDef::weapon("72a"),
    ItemTypeDef::weapon("7mp"),
    ItemTypeDef::weapon("7wa"),
    ItemTypeDef::weapon("7la"),
    ItemTypeDef::weapon("7ba"),
    ItemTypeDef::weapon("7bt"),
    ItemTypeDef::weapon("7ga"),
    ItemTypeDef::weapon("7gi"),
    // wands
    ItemTypeDef::weapon("wnd"),
    ItemTypeDef::weapon("ywn"),
    ItemTypeDef::weapon("bwn"),
    ItemTypeDef::weapon("gwn"),
    ItemTypeDef::weapon("9wn"),
    ItemTypeDef::weapon("9yw"),
    ItemTypeDef::weapon("9bw"),
    ItemTypeDef::weapon("9gw"),
    ItemTypeDef::weapon("7wn"),
    ItemTypeDef::weapon("7yw"),
    ItemTypeDef::weapon("7bw"),
    ItemTypeDef::weapon("7gw"),
    // maces
    ItemTypeDef::weapon("clb"),
    ItemTypeDef::weapon("scp"),
    ItemTypeDef::weapon("gsc"),
    ItemTypeDef::weapon("wsp"),
    ItemTypeDef::weapon("spc"),
    ItemTypeDef::weapon("mac"),
    ItemTypeDef::weapon("mst"),
    ItemTypeDef::weapon("fla"),
    ItemTypeDef::weapon("whm"),
    ItemTypeDef::weapon("mau"),
    ItemTypeDef::weapon("gma"),
    ItemTypeDef::weapon("9cl"),
    ItemTypeDef::weapon("9sc"),
    ItemTypeDef::weapon("9qs"),
    ItemTypeDef::weapon("9ws"),
    ItemTypeDef::weapon("9sp"),
    ItemTypeDef::weapon("9ma"),
    ItemTypeDef::weapon("9mt"),
    ItemTypeDef::weapon("9fl"),
    ItemTypeDef::weapon("9wh"),
    ItemTypeDef::weapon("9m9"),
    ItemTypeDef::weapon("9gm"),
    ItemTypeDef::weapon("7cl"),
    ItemTypeDef::weapon("7sc"),
    ItemTypeDef::weapon("7qs"),
    ItemTypeDef::weapon("7ws"),
    ItemTypeDef::weapon("7sp"),
    ItemTypeDef::weapon("7ma"),
    ItemTypeDef::weapon("7mt"),
    ItemTypeDef::weapon("7fl"),
    ItemTypeDef::weapon("7wh"),
    ItemTypeDef::weapon("7m7"),
    ItemTypeDef::weapon("7gm"),
    // swords
    ItemTypeDef::weapon("ssd"),
    ItemTypeDef::weapon("scm"),
    ItemTypeDef::weapon("sbr"),
    ItemTypeDef::weapon("flc"),
    ItemTypeDef::weapon("crs"),
    ItemTypeDef::weapon("bsd"),
    ItemTypeDef::weapon("lsd"),
    ItemTypeDef::weapon("wsd"),
    ItemTypeDef::weapon("2hs"),
    ItemTypeDef::weapon("clm"),
    ItemTypeDef::weapon("gis"),
    ItemTypeDef::weapon("bsw"),
    ItemTypeDef::weapon("flb"),
    ItemTypeDef::weapon("gsd"),
    ItemTypeDef::weapon("9ss"),
    ItemTypeDef::weapon("9sm"),
    ItemTypeDef::weapon("9sb"),
    ItemTypeDef::weapon("9fc"),
    ItemTypeDef::weapon("9cr"),
    ItemTypeDef::weapon("9bs"),
    ItemTypeDef::weapon("9ls"),
    ItemTypeDef::weapon("9wd"),
    ItemTypeDef::weapon("92h"),
    ItemTypeDef::weapon("9cm"),
    ItemTypeDef::weapon("9gs"),
    ItemTypeDef::weapon("9b9"),
    ItemTypeDef::weapon("9fb"),
    ItemTypeDef::weapon("9gd"),
    ItemTypeDef::weapon("7ss"),
    ItemTypeDef::weapon("7sm"),
    ItemTypeDef::weapon("7sb"),
    ItemTypeDef::weapon("7fc"),
    ItemTypeDef::weapon("7cr"),
    ItemTypeDef::weapon("7bs"),
    ItemTypeDef::weapon("7ls"),
    ItemTypeDef::weapon("7wd"),
    ItemTypeDef::weapon("72h"),
    ItemTypeDef::weapon("7cm"),
    ItemTypeDef::weapon("7gs"),
    ItemTypeDef::weapon("7b7"),
    ItemTypeDef::weapon("7fb"),
    ItemTypeDef::weapon("7gd"),
    // daggers
    ItemTypeDef::weapon("dgr"),
    ItemTypeDef::weapon("dir"),
    ItemTypeDef::weapon("kri"),
    ItemTypeDef::weapon("bld"),
    ItemTypeDef::weapon("9dg"),
    ItemTypeDef::weapon("9di"),
    ItemTypeDef::weapon("9kr"),
    ItemTypeDef::weapon("9bl"),
    ItemTypeDef::weapon("7dg"),
    ItemTypeDef::weapon("7di"),
    ItemTypeDef::weapon("7kr"),
    ItemTypeDef::weapon("7bl"),
    // spears and polearms
    ItemTypeDef::weapon("spr"),
    ItemTypeDef::weapon("tri"),
    ItemTypeDef::weapon("brn"),
    ItemTypeDef::weapon("spt"),
    ItemTypeDef::weapon("pik"),
    ItemTypeDef::weapon("bar"),
    ItemTypeDef::weapon("vou"),
    ItemTypeDef::weapon("scy"),
    ItemTypeDef::weapon("pax"),
    ItemTypeDef::weapon("hal"),
    ItemTypeDef::weapon("wsc"),
    ItemTypeDef::weapon("9sr"),
    ItemTypeDef::weapon("9tr"),
    ItemTypeDef::weapon("9br"),
    ItemTypeDef::weapon("9st"),
    ItemTypeDef::weapon("9p9"),
    ItemTypeDef::weapon("9b7"),
    ItemTypeDef::weapon("9vo"),
    ItemTypeDef::weapon("9s8"),
    ItemTypeDef::weapon("9pa"),
    ItemTypeDef::weapon("9h9"),
    ItemTypeDef::weapon("9wc"),
    ItemTypeDef::weapon("7sr"),
    ItemTypeDef::weapon("7tr"),
    ItemTypeDef::weapon("7br"),
    ItemTypeDef::weapon("7st"),
    ItemTypeDef::weapon("7p7"),
    ItemTypeDef::weapon("7o7"),
    ItemTypeDef::weapon("7vo"),
    ItemTypeDef::weapon("7s8"),
    ItemTypeDef::weapon("7pa"),
    ItemTypeDef::weapon("7h7"),
    ItemTypeDef::weapon("7wc"),
    // staves
    ItemTypeDef::weapon("sst"),
    ItemTypeDef::weapon("lst"),
    ItemTypeDef::weapon("cst"),
    ItemTypeDef::weapon("bst"),
    ItemTypeDef::weapon("wst"),
    ItemTypeDef::weapon("8ss"),
    ItemTypeDef::weapon("8ls"),
    ItemTypeDef::weapon("8cs"),
    ItemTypeDef::weapon("8bs"),
    ItemTypeDef::weapon("8ws"),
    ItemTypeDef::weapon("6ss"),
    ItemTypeDef::weapon("6ls"),
    ItemTypeDef::weapon("6cs"),
    ItemTypeDef::weapon("6bs"),
    ItemTypeDef::weapon("6ws"),
    // bows
    ItemTypeDef::weapon("sbw"),
    ItemTypeDef::weapon("hbw"),
    ItemTypeDef::weapon("lbw"),
    ItemTypeDef::weapon("cbw"),
    ItemTypeDef::weapon("sbb"),
    ItemTypeDef::weapon("lbb"),
    ItemTypeDef::weapon("swb"),
    ItemTypeDef::weapon("lwb"),
    ItemTypeDef::weapon("8sb"),
    ItemTypeDef::weapon("8hb"),
    ItemTypeDef::weapon("8lb"),
    ItemTypeDef::weapon("8cb"),
    ItemTypeDef::weapon("8s8"),
    ItemTypeDef::weapon("8l8"),
    ItemTypeDef::weapon("8sw"),
    ItemTypeDef::weapon("8lw"),
    ItemTypeDef::weapon("6sb"),
    ItemTypeDef::weapon("6hb"),
    ItemTypeDef::weapon("6lb"),
    ItemTypeDef::weapon("6cb"),
    ItemTypeDef::weapon("6s7"),
    ItemTypeDef::weapon("6l7"),
    ItemTypeDef::weapon("6sw"),
    ItemTypeDef::weapon("6lw"),
    ItemTypeDef::weapon("am1"),
    ItemTypeDef::weapon("am2"),
    ItemTypeDef::weapon("am6"),
    ItemTypeDef::weapon("am7"),
    ItemTypeDef::weapon("amb"),
    ItemTypeDef::weapon("amc"),
    // crossbows
    ItemTypeDef::weapon("lxb"),
    ItemTypeDef::weapon("mxb"),
    ItemTypeDef::weapon("hxb"),
    ItemTypeDef::weapon("rxb"),
    ItemTypeDef::weapon("8lx"),
    ItemTypeDef::weapon("8mx"),
    ItemTypeDef::weapon("8hx"),
    ItemTypeDef::weapon("8rx"),
    ItemTypeDef::weapon("6lx"),
    ItemTypeDef::weapon("6mx"),
    ItemTypeDef::weapon("6hx"),
    ItemTypeDef::weapon("6rx"),
    // katars
    ItemTypeDef::weapon("ktr"),
    ItemTypeDef::weapon("wrb"),
    ItemTypeDef::weapon("axf"),
    ItemTypeDef::weapon("ces"),
    ItemTypeDef::weapon("clw"),
    ItemTypeDef::weapon("btl"),
    ItemTypeDef::weapon("skr"),
    ItemTypeDef::weapon("9ar"),
    ItemTypeDef::weapon("9wb"),
    ItemTypeDef::weapon("9xf"),
    ItemTypeDef::weapon("9cs"),
    ItemTypeDef::weapon("9lw"),
    ItemTypeDef::weapon("9tw"),
    ItemTypeDef::weapon("9qr"),
    ItemTypeDef::weapon("7ar"),
    ItemTypeDef::weapon("7wb"),
    ItemTypeDef::weapon("7xf"),
    ItemTypeDef::weapon("7cs"),
    ItemTypeDef::weapon("7lw"),
    ItemTypeDef::weapon("7tw"),
    ItemTypeDef::weapon("7qr"),
    // orbs
    ItemTypeDef::weapon("ob1"),
    ItemTypeDef::weapon("ob2"),
    ItemTypeDef::weapon("ob3"),
    ItemTypeDef::weapon("ob4"),
    ItemTypeDef::weapon("ob5"),
    ItemTypeDef::weapon("ob6"),
    ItemTypeDef::weapon("ob7"),
    ItemTypeDef::weapon("ob8"),
    ItemTypeDef::weapon("ob9"),
    ItemTypeDef::weapon("oba"),
    ItemTypeDef::weapon("obb"),
    ItemTypeDef::weapon("obc"),
    ItemTypeDef::weapon("obd"),
    ItemTypeDef::weapon("obe"),
    ItemTypeDef::weapon("obf"),
    // amazon spears
    ItemTypeDef::weapon("am3"),
    ItemTypeDef::weapon("am4"),
    ItemTypeDef::weapon("am8"),
    ItemTypeDef::weapon("am9"),
    ItemTypeDef::weapon("amd"),
    ItemTypeDef::weapon("ame"),
    // quest weapons
    ItemTypeDef::weapon("leg"),
    ItemTypeDef::weapon("hdm"),
    ItemTypeDef::weapon("hfh"),
    ItemTypeDef::weapon("hst"),
    ItemTypeDef::weapon("msf"),
    ItemTypeDef::weapon("d33"),
    ItemTypeDef::weapon("g33"),
    ItemTypeDef::weapon("qf1"),
    ItemTypeDef::weapon("qf2"),
    // throwing
    ItemTypeDef::stackable_weapon("tkf"),
    ItemTypeDef::stackable_weapon("tax"),
    ItemTypeDef::stackable_weapon("bkf"),
    ItemTypeDef::stackable_weapon("bal"),
    ItemTypeDef::stackable_weapon("9tk"),
    ItemTypeDef::stackable_weapon("9ta"),
    ItemTypeDef::stackable_weapon("9bk"),
    ItemTypeDef::stackable_weapon("9b8"),
    ItemTypeDef::stackable_weapon("7tk"),
    ItemTypeDef::stackable_weapon("7ta"),
    ItemTypeDef::stackable_weapon("7bk"),
    ItemTypeDef::stackable_weapon("7b8"),
    // javelins
    ItemTypeDef::stackable_weapon("jav"),
    ItemTypeDef::stackable_weapon("pil"),
    ItemTypeDef::stackable_weapon("ssp"),
    ItemTypeDef::stackable_weapon("glv"),
    ItemTypeDef::stackable_weapon("tsp"),
    ItemTypeDef::stackable_weapon("9ja"),
    ItemTypeDef::stackable_weapon("9pi"),
    ItemTypeDef::stackable_weapon("9s9"),
    ItemTypeDef::stackable_weapon("9gl"),
    ItemTypeDef::stackable_weapon("9ts"),
    ItemTypeDef::stackable_weapon("7ja"),
    ItemTypeDef::stackable_weapon("7pi"),
    ItemTypeDef::stackable_weapon("7s7"),
    ItemTypeDef::stackable_weapon("7gl"),
    ItemTypeDef::stackable_weapon("7ts"),
    ItemTypeDef::stackable_weapon("am5"),
    ItemTypeDef::stackable_weapon("ama"),
    ItemTypeDef::stackable_weapon("amf"),
    // throwing potions
    ItemTypeDef::stackable_weapon("gps"),
    ItemTypeDef::stackable_weapon("ops"),
    ItemTypeDef::stackable_weapon("gpm"),
    ItemTypeDef::stackable_weapon("opm"),
    ItemTypeDef::stackable_weapon("gpl"),
    ItemTypeDef::stackable_weapon("opl"),
    // potions
    ItemTypeDef::misc("hp1"),
    ItemTypeDef::misc("hp2"),
    ItemTypeDef::misc("hp3"),
    ItemTypeDef::misc("hp4"),
    ItemTypeDef::misc("hp5"),
    ItemTypeDef::misc("mp1"),
    ItemTypeDef::misc("mp2"),
    ItemTypeDef::misc("mp3"),
    ItemTypeDef::misc("mp4"),
    ItemTypeDef::misc("mp5"),
    ItemTypeDef::misc("rvs"),
    ItemTypeDef::misc("rvl"),
    ItemTypeDef::misc("vps"),
    ItemTypeDef::misc("yps"),
    ItemTypeDef::misc("wms"),
    ItemTypeDef::misc("elx"),
    ItemTypeDef::misc("hpo"),
    ItemTypeDef::misc("mpo"),
    ItemTypeDef::misc("hpf"),
    ItemTypeDef::misc("mpf"),
    ItemTypeDef::misc("xyz"),
    // scrolls
    ItemTypeDef::misc("tsc"),
    ItemTypeDef::misc("isc"),
    ItemTypeDef::misc("tr1"),
    ItemTypeDef::misc("tr2"),
    // gems
    ItemTypeDef::misc("gcv"),
    ItemTypeDef::misc("gcw"),
    ItemTypeDef::misc("gcg"),
    ItemTypeDef::misc("gcr"),
    ItemTypeDef::misc("gcb"),
    ItemTypeDef::misc("skc"),
    ItemTypeDef::misc("gcy"),
    ItemTypeDef::misc("gfv"),
    ItemTypeDef::misc("gfw"),
    ItemTypeDef::misc("gfg"),
    ItemTypeDef::misc("gfr"),
    ItemTypeDef::misc("gfb"),
    ItemTypeDef::misc("skf"),
    ItemTypeDef::misc("gfy"),
    ItemTypeDef::misc("gsv"),
    ItemTypeDef::misc("gsw"),
    ItemTypeDef::misc("gsg"),
    ItemTypeDef::misc("gsr"),
    ItemTypeDef::misc("gsb"),
    ItemTypeDef::misc("sku"),
    ItemTypeDef::misc("gsy"),
    ItemTypeDef::misc("gzv"),
    ItemTypeDef::misc("glw"),
    ItemTypeDef::misc("glg"),
    ItemTypeDef::misc("glr"),
    ItemTypeDef::misc("glb"),
    ItemTypeDef::misc("skl"),
    ItemTypeDef::misc("gly"),
    ItemTypeDef::misc("gpv"),
    ItemTypeDef::misc("gpw"),
    ItemTypeDef::misc("gpg"),
    ItemTypeDef::misc("gpr"),
    ItemTypeDef::misc("gpb"),
    ItemTypeDef::misc("skz"),
    ItemTypeDef::misc("gpy"),
    // runes
    ItemTypeDef::misc("r01"),
    ItemTypeDef::misc("r02"),
    ItemTypeDef::misc("r03"),
    ItemTypeDef::misc("r04"),
    ItemTypeDef::misc("r05"),
    ItemTypeDef::misc("r06"),
    ItemTypeDef::misc("r07"),
    ItemTypeDef::misc("r08"),
    ItemTypeDef::misc("r09"),
    ItemTypeDef::misc("r10"),
    ItemTypeDef::misc("r11"),
    ItemTypeDef::misc("r12"),
    ItemTypeDef::misc("r13"),
    ItemTypeDef::misc("r14"),
    ItemTypeDef::misc("r15"),
    ItemTypeDef::misc("r16"),
    ItemTypeDef::misc("r17"),
    ItemTypeDef::misc("r18"),
    ItemTypeDef::misc("r19"),
    ItemTypeDef::misc("r20"),
    ItemTypeDef::misc("r21"),
    ItemTypeDef::misc("r22"),
    ItemTypeDef::misc("r23"),
    ItemTypeDef::misc("r24"),
    ItemTypeDef::misc("r25"),
    ItemTypeDef::misc("r26"),
    ItemTypeDef::misc("r27"),
    ItemTypeDef::misc("r28"),
    ItemTypeDef::misc("r29"),
    ItemTypeDef::misc("r30"),
    ItemTypeDef::misc("r31"),
    ItemTypeDef::misc("r32"),
    ItemTypeDef::misc("r33"),
    // jewelry
    ItemTypeDef::misc("rin"),
    ItemTypeDef::misc("amu"),
    ItemTypeDef::misc("vip"),
    ItemTypeDef::misc("jew"),
    ItemTypeDef::misc("cm1"),
    ItemTypeDef::misc("cm2"),
    ItemTypeDef::misc("cm3"),
    // quest items
    ItemTypeDef::misc("bks"),
    ItemTypeDef::misc("bkd"),
    ItemTypeDef::misc("ass"),
    ItemTypeDef::misc("box"),
    ItemTypeDef::misc("j34"),
    ItemTypeDef::misc("g34"),
    ItemTypeDef::misc("bbb"),
    ItemTypeDef::misc("mss"),
    ItemTypeDef::misc("ice"),
    ItemTypeDef::misc("pk1"),
    ItemTypeDef::misc("pk2"),
    ItemTypeDef::misc("pk3"),
    ItemTypeDef::misc("dhn"),
    ItemTypeDef::misc("bey"),
    ItemTypeDef::misc("mbr"),
    ItemTypeDef::misc("toa"),
    ItemTypeDef::misc("tes"),
    ItemTypeDef::misc("ceh"),
    ItemTypeDef::misc("bet"),
    ItemTypeDef::misc("fed"),
    ItemTypeDef::misc("std"),
    ItemTypeDef::misc("qey"),
    ItemTypeDef::misc("qbr"),
    ItemTypeDef::misc("qhr"),
    // other
    ItemTypeDef::misc("gld"),
    // keys and quivers
    ItemTypeDef::stackable_misc("key"),
    ItemTypeDef::stackable_misc("aqv"),
    ItemTypeDef::stackable_misc("cqv"),
    // tomes
    ItemTypeDef::tome("tbk"),
    ItemTypeDef::tome("ibk"),
];
