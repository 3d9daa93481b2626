//! Item stat definitions: how each magic property is stored in an item.

use std::borrow::Cow;

/// Id written before each item property.
pub type StatId = u16;

/// Terminator id closing an item property list.
pub const PROPERTY_LIST_END: StatId = 0x1ff;

/// Width of a stat id in a property list.
pub const STAT_ID_BITS: u8 = 9;

/// How a stat's parameter and value are packed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatEncoding {
    /// Parameter (if any) and value are single numbers.
    #[default]
    Plain,
    /// Parameter splits into skill tab (3 bits) and class (13 bits).
    SkillTab,
    /// Parameter splits into skill level (6 bits) and skill id (10 bits).
    ChanceToCast,
    /// Like `ChanceToCast`, and the value splits into current and max charges.
    Charges,
}

/// One entry of the item stat table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStatDef {
    pub id: StatId,
    pub name: Cow<'static, str>,
    /// Width of the stored value.
    pub save_bits: u8,
    /// Bias added to the value before it is stored.
    #[cfg_attr(feature = "serde", serde(default))]
    pub save_add: i32,
    /// Width of the parameter preceding the value; zero when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub param_bits: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub encoding: StatEncoding,
    /// Number of consecutive stats stored under this id (damage ranges).
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub group_size: u8,
}

#[cfg(feature = "serde")]
const fn one() -> u8 {
    1
}

impl ItemStatDef {
    #[must_use]
    pub const fn new(id: StatId, name: &'static str, save_bits: u8, save_add: i32) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
            save_bits,
            save_add,
            param_bits: 0,
            encoding: StatEncoding::Plain,
            group_size: 1,
        }
    }

    /// Creates a stat carrying a parameter ahead of its value.
    #[must_use]
    pub const fn with_param(
        id: StatId,
        name: &'static str,
        save_bits: u8,
        param_bits: u8,
        encoding: StatEncoding,
    ) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
            save_bits,
            save_add: 0,
            param_bits,
            encoding,
            group_size: 1,
        }
    }

    /// Creates a stat whose value is followed by `group_size - 1` id-less stats.
    #[must_use]
    pub const fn grouped(
        id: StatId,
        name: &'static str,
        save_bits: u8,
        save_add: i32,
        group_size: u8,
    ) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
            save_bits,
            save_add,
            param_bits: 0,
            encoding: StatEncoding::Plain,
            group_size,
        }
    }

    /// Largest raw value that fits the stored width.
    #[must_use]
    pub const fn max_raw(&self) -> u64 {
        if self.save_bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.save_bits) - 1
        }
    }
}

pub(crate) static ITEM_STATS: [ItemStatDef; 190] = [
    ItemStatDef::new(0, "strength", 8, 32),
    ItemStatDef::new(1, "energy", 7, 32),
    ItemStatDef::new(2, "dexterity", 7, 32),
    ItemStatDef::new(3, "vitality", 7, 32),
    ItemStatDef::new(7, "maxhp", 9, 32),
    ItemStatDef::new(9, "maxmana", 8, 32),
    ItemStatDef::new(11, "maxstamina", 8, 32),
    ItemStatDef::new(16, "item_armor_percent", 9, 0),
    ItemStatDef::grouped(17, "item_maxdamage_percent", 9, 0, 2),
    ItemStatDef::new(18, "item_mindamage_percent", 9, 0),
    ItemStatDef::new(19, "tohit", 10, 0),
    ItemStatDef::new(20, "toblock", 6, 0),
    ItemStatDef::new(21, "mindamage", 6, 0),
    ItemStatDef::new(22, "maxdamage", 7, 0),
    ItemStatDef::new(23, "secondary_mindamage", 6, 0),
    ItemStatDef::new(24, "secondary_maxdamage", 7, 0),
    ItemStatDef::new(25, "damagepercent", 8, 0),
    ItemStatDef::new(26, "manarecovery", 8, 0),
    ItemStatDef::new(27, "manarecoverybonus", 8, 0),
    ItemStatDef::new(28, "staminarecoverybonus", 8, 0),
    ItemStatDef::new(31, "armorclass", 11, 10),
    ItemStatDef::new(32, "armorclass_vs_missile", 9, 0),
    ItemStatDef::new(33, "armorclass_vs_hth", 8, 0),
    ItemStatDef::new(34, "normal_damage_reduction", 6, 0),
    ItemStatDef::new(35, "magic_damage_reduction", 6, 0),
    ItemStatDef::new(36, "damageresist", 8, 0),
    ItemStatDef::new(37, "magicresist", 8, 0),
    ItemStatDef::new(38, "maxmagicresist", 5, 0),
    ItemStatDef::new(39, "fireresist", 8, 50),
    ItemStatDef::new(40, "maxfireresist", 5, 0),
    ItemStatDef::new(41, "lightresist", 8, 50),
    ItemStatDef::new(42, "maxlightresist", 5, 0),
    ItemStatDef::new(43, "coldresist", 8, 50),
    ItemStatDef::new(44, "maxcoldresist", 5, 0),
    ItemStatDef::new(45, "poisonresist", 8, 50),
    ItemStatDef::new(46, "maxpoisonresist", 5, 0),
    ItemStatDef::grouped(48, "firemindam", 8, 0, 2),
    ItemStatDef::new(49, "firemaxdam", 9, 0),
    ItemStatDef::grouped(50, "lightmindam", 6, 0, 2),
    ItemStatDef::new(51, "lightmaxdam", 10, 0),
    ItemStatDef::grouped(52, "magicmindam", 8, 0, 2),
    ItemStatDef::new(53, "magicmaxdam", 9, 0),
    ItemStatDef::grouped(54, "coldmindam", 8, 0, 3),
    ItemStatDef::new(55, "coldmaxdam", 9, 0),
    ItemStatDef::new(56, "coldlength", 8, 0),
    ItemStatDef::grouped(57, "poisonmindam", 10, 0, 3),
    ItemStatDef::new(58, "poisonmaxdam", 10, 0),
    ItemStatDef::new(59, "poisonlength", 9, 0),
    ItemStatDef::new(60, "lifedrainmindam", 7, 0),
    ItemStatDef::new(62, "manadrainmindam", 7, 0),
    ItemStatDef::new(67, "velocitypercent", 7, 30),
    ItemStatDef::new(68, "attackrate", 7, 30),
    ItemStatDef::new(71, "value", 8, 100),
    ItemStatDef::new(72, "durability", 9, 0),
    ItemStatDef::new(73, "maxdurability", 8, 0),
    ItemStatDef::new(74, "hpregen", 6, 30),
    ItemStatDef::new(75, "item_maxdurability_percent", 7, 20),
    ItemStatDef::new(76, "item_maxhp_percent", 6, 10),
    ItemStatDef::new(77, "item_maxmana_percent", 6, 10),
    ItemStatDef::new(78, "item_attackertakesdamage", 7, 0),
    ItemStatDef::new(79, "item_goldbonus", 9, 100),
    ItemStatDef::new(80, "item_magicbonus", 8, 100),
    ItemStatDef::new(81, "item_knockback", 7, 0),
    ItemStatDef::new(82, "item_timeduration", 10, 20),
    ItemStatDef::with_param(83, "item_addclassskills", 3, 3, StatEncoding::Plain),
    ItemStatDef::new(85, "item_addexperience", 9, 50),
    ItemStatDef::new(86, "item_healafterkill", 7, 0),
    ItemStatDef::new(87, "item_reducedprices", 7, 0),
    ItemStatDef::new(88, "item_doubleherbduration", 1, 0),
    ItemStatDef::new(89, "item_lightradius", 4, 4),
    ItemStatDef::new(90, "item_lightcolor", 24, 0),
    ItemStatDef::new(91, "item_req_percent", 8, 100),
    ItemStatDef::new(92, "item_levelreq", 7, 0),
    ItemStatDef::new(93, "item_fasterattackrate", 7, 20),
    ItemStatDef::new(94, "item_levelreqpct", 7, 64),
    ItemStatDef::new(96, "item_fastermovevelocity", 7, 20),
    ItemStatDef::with_param(97, "item_nonclassskill", 6, 9, StatEncoding::Plain),
    ItemStatDef::with_param(98, "state", 1, 8, StatEncoding::Plain),
    ItemStatDef::new(99, "item_fastergethitrate", 7, 20),
    ItemStatDef::new(102, "item_fasterblockrate", 7, 20),
    ItemStatDef::new(105, "item_fastercastrate", 7, 20),
    ItemStatDef::with_param(107, "item_singleskill", 3, 9, StatEncoding::Plain),
    ItemStatDef::new(108, "item_restinpeace", 1, 0),
    ItemStatDef::new(109, "curse_resistance", 9, 0),
    ItemStatDef::new(110, "item_poisonlengthresist", 8, 20),
    ItemStatDef::new(111, "item_normaldamage", 9, 20),
    ItemStatDef::new(112, "item_howl", 7, -1),
    ItemStatDef::new(113, "item_stupidity", 7, 0),
    ItemStatDef::new(114, "item_damagetomana", 6, 0),
    ItemStatDef::new(115, "item_ignoretargetac", 1, 0),
    ItemStatDef::new(116, "item_fractionaltargetac", 7, 0),
    ItemStatDef::new(117, "item_preventheal", 7, 0),
    ItemStatDef::new(118, "item_halffreezeduration", 1, 0),
    ItemStatDef::new(119, "item_tohit_percent", 9, 20),
    ItemStatDef::new(120, "item_damagetargetac", 7, 128),
    ItemStatDef::new(121, "item_demondamage_percent", 9, 20),
    ItemStatDef::new(122, "item_undeaddamage_percent", 9, 20),
    ItemStatDef::new(123, "item_demon_tohit", 10, 128),
    ItemStatDef::new(124, "item_undead_tohit", 10, 128),
    ItemStatDef::new(125, "item_throwable", 1, 0),
    ItemStatDef::with_param(126, "item_elemskill", 3, 3, StatEncoding::Plain),
    ItemStatDef::new(127, "item_allskills", 3, 0),
    ItemStatDef::new(128, "item_attackertakeslightdamage", 5, 0),
    ItemStatDef::new(134, "item_freeze", 5, 0),
    ItemStatDef::new(135, "item_openwounds", 7, 0),
    ItemStatDef::new(136, "item_crushingblow", 7, 0),
    ItemStatDef::new(137, "item_kickdamage", 7, 0),
    ItemStatDef::new(138, "item_manaafterkill", 7, 0),
    ItemStatDef::new(139, "item_healafterdemonkill", 7, 0),
    ItemStatDef::new(140, "item_extrablood", 7, 0),
    ItemStatDef::new(141, "item_deadlystrike", 7, 0),
    ItemStatDef::new(142, "item_absorbfire_percent", 7, 0),
    ItemStatDef::new(143, "item_absorbfire", 7, 0),
    ItemStatDef::new(144, "item_absorblight_percent", 7, 0),
    ItemStatDef::new(145, "item_absorblight", 7, 0),
    ItemStatDef::new(146, "item_absorbmagic_percent", 7, 0),
    ItemStatDef::new(147, "item_absorbmagic", 7, 0),
    ItemStatDef::new(148, "item_absorbcold_percent", 7, 0),
    ItemStatDef::new(149, "item_absorbcold", 7, 0),
    ItemStatDef::new(150, "item_slow", 7, 0),
    ItemStatDef::with_param(151, "item_aura", 5, 9, StatEncoding::Plain),
    ItemStatDef::new(152, "item_indesctructible", 1, 0),
    ItemStatDef::new(153, "item_cannotbefrozen", 1, 0),
    ItemStatDef::new(154, "item_staminadrainpct", 7, 20),
    ItemStatDef::with_param(155, "item_reanimate", 7, 10, StatEncoding::Plain),
    ItemStatDef::new(156, "item_pierce", 7, 0),
    ItemStatDef::new(157, "item_magicarrow", 7, 0),
    ItemStatDef::new(158, "item_explosivearrow", 7, 0),
    ItemStatDef::new(159, "item_throw_mindamage", 6, 0),
    ItemStatDef::new(160, "item_throw_maxdamage", 7, 0),
    ItemStatDef::with_param(188, "item_addskill_tab", 3, 16, StatEncoding::SkillTab),
    ItemStatDef::new(194, "item_numsockets", 4, 0),
    ItemStatDef::with_param(195, "item_skillonattack", 7, 16, StatEncoding::ChanceToCast),
    ItemStatDef::with_param(196, "item_skillonkill", 7, 16, StatEncoding::ChanceToCast),
    ItemStatDef::with_param(197, "item_skillondeath", 7, 16, StatEncoding::ChanceToCast),
    ItemStatDef::with_param(198, "item_skillonhit", 7, 16, StatEncoding::ChanceToCast),
    ItemStatDef::with_param(199, "item_skillonlevelup", 7, 16, StatEncoding::ChanceToCast),
    ItemStatDef::with_param(201, "item_skillongethit", 7, 16, StatEncoding::ChanceToCast),
    ItemStatDef::with_param(204, "item_charged_skill", 16, 16, StatEncoding::Charges),
    ItemStatDef::new(214, "item_armor_perlevel", 6, 0),
    ItemStatDef::new(215, "item_armorpercent_perlevel", 6, 0),
    ItemStatDef::new(216, "item_hp_perlevel", 6, 0),
    ItemStatDef::new(217, "item_mana_perlevel", 6, 0),
    ItemStatDef::new(218, "item_maxdamage_perlevel", 6, 0),
    ItemStatDef::new(219, "item_maxdamage_percent_perlevel", 6, 0),
    ItemStatDef::new(220, "item_strength_perlevel", 6, 0),
    ItemStatDef::new(221, "item_dexterity_perlevel", 6, 0),
    ItemStatDef::new(222, "item_energy_perlevel", 6, 0),
    ItemStatDef::new(223, "item_vitality_perlevel", 6, 0),
    ItemStatDef::new(224, "item_tohit_perlevel", 6, 0),
    ItemStatDef::new(225, "item_tohitpercent_perlevel", 6, 0),
    ItemStatDef::new(226, "item_cold_damagemax_perlevel", 6, 0),
    ItemStatDef::new(227, "item_fire_damagemax_perlevel", 6, 0),
    ItemStatDef::new(228, "item_ltng_damagemax_perlevel", 6, 0),
    ItemStatDef::new(229, "item_pois_damagemax_perlevel", 6, 0),
    ItemStatDef::new(230, "item_resist_cold_perlevel", 6, 0),
    ItemStatDef::new(231, "item_resist_fire_perlevel", 6, 0),
    ItemStatDef::new(232, "item_resist_ltng_perlevel", 6, 0),
    ItemStatDef::new(233, "item_resist_pois_perlevel", 6, 0),
    ItemStatDef::new(234, "item_absorb_cold_perlevel", 6, 0),
    ItemStatDef::new(235, "item_absorb_fire_perlevel", 6, 0),
    ItemStatDef::new(236, "item_absorb_ltng_perlevel", 6, 0),
    ItemStatDef::new(237, "item_absorb_pois_perlevel", 6, 0),
    ItemStatDef::new(238, "item_thorns_perlevel", 5, 0),
    ItemStatDef::new(239, "item_find_gold_perlevel", 6, 0),
    ItemStatDef::new(240, "item_find_magic_perlevel", 6, 0),
    ItemStatDef::new(241, "item_regenstamina_perlevel", 6, 0),
    ItemStatDef::new(242, "item_stamina_perlevel", 6, 0),
    ItemStatDef::new(243, "item_damage_demon_perlevel", 6, 0),
    ItemStatDef::new(244, "item_damage_undead_perlevel", 6, 0),
    ItemStatDef::new(245, "item_tohit_demon_perlevel", 6, 0),
    ItemStatDef::new(246, "item_tohit_undead_perlevel", 6, 0),
    ItemStatDef::new(247, "item_crushingblow_perlevel", 6, 0),
    ItemStatDef::new(248, "item_openwounds_perlevel", 6, 0),
    ItemStatDef::new(249, "item_kick_damage_perlevel", 6, 0),
    ItemStatDef::new(250, "item_deadlystrike_perlevel", 6, 0),
    ItemStatDef::new(252, "item_replenish_durability", 6, 0),
    ItemStatDef::new(253, "item_replenish_quantity", 5, 0),
    ItemStatDef::new(254, "item_extra_stack", 8, 0),
    ItemStatDef::new(329, "passive_fire_mastery", 9, 50),
    ItemStatDef::new(330, "passive_ltng_mastery", 9, 50),
    ItemStatDef::new(331, "passive_cold_mastery", 9, 50),
    ItemStatDef::new(332, "passive_pois_mastery", 9, 50),
    ItemStatDef::new(333, "passive_fire_pierce", 8, 0),
    ItemStatDef::new(334, "passive_ltng_pierce", 8, 0),
    ItemStatDef::new(335, "passive_cold_pierce", 8, 0),
    ItemStatDef::new(336, "passive_pois_pierce", 8, 0),
    ItemStatDef::new(356, "quest_item_difficulty", 2, 0),
    ItemStatDef::new(357, "passive_mag_mastery", 9, 50),
    ItemStatDef::new(358, "passive_mag_pierce", 8, 0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: StatId) -> &'static ItemStatDef {
        ITEM_STATS.iter().find(|def| def.id == id).unwrap()
    }

    #[test]
    fn ids_strictly_ascending() {
        for pair in ITEM_STATS.windows(2) {
            assert!(pair[0].id < pair[1].id, "{} before {}", pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn damage_groups_are_followed_by_their_members() {
        for def in ITEM_STATS.iter().filter(|def| def.group_size > 1) {
            for offset in 1..u16::from(def.group_size) {
                assert!(
                    ITEM_STATS.iter().any(|other| other.id == def.id + offset),
                    "stat {} missing member {}",
                    def.id,
                    def.id + offset
                );
            }
        }
    }

    #[test]
    fn resist_bias() {
        let fire = find(39);
        assert_eq!(fire.save_bits, 8);
        assert_eq!(fire.save_add, 50);
    }

    #[test]
    fn charged_skill_shape() {
        let charges = find(204);
        assert_eq!(charges.param_bits, 16);
        assert_eq!(charges.save_bits, 16);
        assert_eq!(charges.encoding, StatEncoding::Charges);
    }

    #[test]
    fn max_raw() {
        assert_eq!(find(90).max_raw(), 0x00ff_ffff);
        assert_eq!(find(88).max_raw(), 1);
    }
}
