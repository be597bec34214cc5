//! [`DeepMerge`] for every record type of the match model.
//!
//! Each impl lists the fields in declaration order with the policy used for
//! each: `scalar` for optional leaves, `record` for nested records, `list`
//! for sequences (see [`crate::policy`]).

use lol_types::{
    ChampionStats, DamageStats, GameSources, MatchRecord, Player, PlayerEndOfGameStats,
    PlayerSources, RiotGameSource, RiotPlayerSource, Snapshot, Team, TeamEndOfGameStats, Teams,
};

use crate::context::MergeContext;
use crate::error::MergeResult;
use crate::merge::DeepMerge;

impl DeepMerge for MatchRecord {
    fn deep_merge(&self, other: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            sources: ctx.record("sources", &self.sources, &other.sources)?,
            duration: ctx.scalar("duration", &self.duration, &other.duration)?,
            start: ctx.scalar("start", &self.start, &other.start)?,
            patch: ctx.scalar("patch", &self.patch, &other.patch)?,
            game_version: ctx.scalar("gameVersion", &self.game_version, &other.game_version)?,
            winner: ctx.scalar("winner", &self.winner, &other.winner)?,
            teams: ctx.record("teams", &self.teams, &other.teams)?,
            events: ctx.list("events", &self.events, &other.events)?,
            tournament: ctx.scalar("tournament", &self.tournament, &other.tournament)?,
            game_in_series: ctx.scalar(
                "gameInSeries",
                &self.game_in_series,
                &other.game_in_series,
            )?,
            vod: ctx.scalar("vod", &self.vod, &other.vod)?,
            picks_bans: ctx.list("picksBans", &self.picks_bans, &other.picks_bans)?,
        })
    }
}

impl DeepMerge for GameSources {
    fn deep_merge(&self, other: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            riot_lol_api: ctx.record("riotLolApi", &self.riot_lol_api, &other.riot_lol_api)?,
        })
    }
}

impl DeepMerge for RiotGameSource {
    fn deep_merge(&self, other: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            game_id: ctx.scalar("gameId", &self.game_id, &other.game_id)?,
            platform_id: ctx.scalar("platformId", &self.platform_id, &other.platform_id)?,
        })
    }
}

impl DeepMerge for Teams {
    fn deep_merge(&self, other: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            blue: ctx.record("BLUE", &self.blue, &other.blue)?,
            red: ctx.record("RED", &self.red, &other.red)?,
        })
    }
}

impl DeepMerge for Team {
    fn deep_merge(&self, other: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            players: ctx.list("players", &self.players, &other.players)?,
            bans: ctx.list("bans", &self.bans, &other.bans)?,
            end_of_game_stats: ctx.record(
                "endOfGameStats",
                &self.end_of_game_stats,
                &other.end_of_game_stats,
            )?,
            epic_monsters_kills: ctx.list(
                "epicMonstersKills",
                &self.epic_monsters_kills,
                &other.epic_monsters_kills,
            )?,
            buildings_kills: ctx.list(
                "buildingsKills",
                &self.buildings_kills,
                &other.buildings_kills,
            )?,
            early_surrendered: ctx.scalar(
                "earlySurrendered",
                &self.early_surrendered,
                &other.early_surrendered,
            )?,
        })
    }
}

impl DeepMerge for TeamEndOfGameStats {
    fn deep_merge(&self, o: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            turret_kills: ctx.scalar("turretKills", &self.turret_kills, &o.turret_kills)?,
            inhibitor_kills: ctx.scalar(
                "inhibitorKills",
                &self.inhibitor_kills,
                &o.inhibitor_kills,
            )?,
            first_turret: ctx.scalar("firstTurret", &self.first_turret, &o.first_turret)?,
            first_inhibitor: ctx.scalar(
                "firstInhibitor",
                &self.first_inhibitor,
                &o.first_inhibitor,
            )?,
            rift_herald_kills: ctx.scalar(
                "riftHeraldKills",
                &self.rift_herald_kills,
                &o.rift_herald_kills,
            )?,
            dragon_kills: ctx.scalar("dragonKills", &self.dragon_kills, &o.dragon_kills)?,
            baron_kills: ctx.scalar("baronKills", &self.baron_kills, &o.baron_kills)?,
            first_rift_herald: ctx.scalar(
                "firstRiftHerald",
                &self.first_rift_herald,
                &o.first_rift_herald,
            )?,
            first_dragon: ctx.scalar("firstDragon", &self.first_dragon, &o.first_dragon)?,
            first_baron: ctx.scalar("firstBaron", &self.first_baron, &o.first_baron)?,
        })
    }
}

impl DeepMerge for Player {
    fn deep_merge(&self, o: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            id: ctx.scalar("id", &self.id, &o.id)?,
            in_game_name: ctx.scalar("inGameName", &self.in_game_name, &o.in_game_name)?,
            profile_icon_id: ctx.scalar(
                "profileIconId",
                &self.profile_icon_id,
                &o.profile_icon_id,
            )?,
            role: ctx.scalar("role", &self.role, &o.role)?,
            champion_id: ctx.scalar("championId", &self.champion_id, &o.champion_id)?,
            sources: ctx.record("sources", &self.sources, &o.sources)?,
            primary_rune_tree_id: ctx.scalar(
                "primaryRuneTreeId",
                &self.primary_rune_tree_id,
                &o.primary_rune_tree_id,
            )?,
            secondary_rune_tree_id: ctx.scalar(
                "secondaryRuneTreeId",
                &self.secondary_rune_tree_id,
                &o.secondary_rune_tree_id,
            )?,
            runes: ctx.list("runes", &self.runes, &o.runes)?,
            summoner_spells: ctx.list("summonerSpells", &self.summoner_spells, &o.summoner_spells)?,
            end_of_game_stats: ctx.record(
                "endOfGameStats",
                &self.end_of_game_stats,
                &o.end_of_game_stats,
            )?,
            snapshots: ctx.list("snapshots", &self.snapshots, &o.snapshots)?,
            items_events: ctx.list("itemsEvents", &self.items_events, &o.items_events)?,
            wards_events: ctx.list("wardsEvents", &self.wards_events, &o.wards_events)?,
            skills_level_up_events: ctx.list(
                "skillsLevelUpEvents",
                &self.skills_level_up_events,
                &o.skills_level_up_events,
            )?,
            large_monsters_kills: ctx.list(
                "largeMonstersKills",
                &self.large_monsters_kills,
                &o.large_monsters_kills,
            )?,
            special_kills: ctx.list("specialKills", &self.special_kills, &o.special_kills)?,
        })
    }
}

impl DeepMerge for PlayerSources {
    fn deep_merge(&self, other: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            riot_lol_api: ctx.record("riotLolApi", &self.riot_lol_api, &other.riot_lol_api)?,
        })
    }
}

impl DeepMerge for RiotPlayerSource {
    fn deep_merge(&self, o: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            puuid: ctx.scalar("puuid", &self.puuid, &o.puuid)?,
            account_id: ctx.scalar("accountId", &self.account_id, &o.account_id)?,
            summoner_id: ctx.scalar("summonerId", &self.summoner_id, &o.summoner_id)?,
            platform_id: ctx.scalar("platformId", &self.platform_id, &o.platform_id)?,
        })
    }
}

impl DeepMerge for PlayerEndOfGameStats {
    fn deep_merge(&self, o: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            first_blood: ctx.scalar("firstBlood", &self.first_blood, &o.first_blood)?,
            first_blood_assist: ctx.scalar(
                "firstBloodAssist",
                &self.first_blood_assist,
                &o.first_blood_assist,
            )?,
            first_turret: ctx.scalar("firstTurret", &self.first_turret, &o.first_turret)?,
            first_turret_assist: ctx.scalar(
                "firstTurretAssist",
                &self.first_turret_assist,
                &o.first_turret_assist,
            )?,
            kills: ctx.scalar("kills", &self.kills, &o.kills)?,
            deaths: ctx.scalar("deaths", &self.deaths, &o.deaths)?,
            assists: ctx.scalar("assists", &self.assists, &o.assists)?,
            gold: ctx.scalar("gold", &self.gold, &o.gold)?,
            cs: ctx.scalar("cs", &self.cs, &o.cs)?,
            level: ctx.scalar("level", &self.level, &o.level)?,
            wards_placed: ctx.scalar("wardsPlaced", &self.wards_placed, &o.wards_placed)?,
            wards_killed: ctx.scalar("wardsKilled", &self.wards_killed, &o.wards_killed)?,
            vision_wards_bought: ctx.scalar(
                "visionWardsBought",
                &self.vision_wards_bought,
                &o.vision_wards_bought,
            )?,
            vision_score: ctx.scalar("visionScore", &self.vision_score, &o.vision_score)?,
            killing_sprees: ctx.scalar("killingSprees", &self.killing_sprees, &o.killing_sprees)?,
            largest_killing_spree: ctx.scalar(
                "largestKillingSpree",
                &self.largest_killing_spree,
                &o.largest_killing_spree,
            )?,
            double_kills: ctx.scalar("doubleKills", &self.double_kills, &o.double_kills)?,
            triple_kills: ctx.scalar("tripleKills", &self.triple_kills, &o.triple_kills)?,
            quadra_kills: ctx.scalar("quadraKills", &self.quadra_kills, &o.quadra_kills)?,
            penta_kills: ctx.scalar("pentaKills", &self.penta_kills, &o.penta_kills)?,
            turret_kills: ctx.scalar("turretKills", &self.turret_kills, &o.turret_kills)?,
            inhibitor_kills: ctx.scalar(
                "inhibitorKills",
                &self.inhibitor_kills,
                &o.inhibitor_kills,
            )?,
            monster_kills: ctx.scalar("monsterKills", &self.monster_kills, &o.monster_kills)?,
            total_damage_dealt: ctx.scalar(
                "totalDamageDealt",
                &self.total_damage_dealt,
                &o.total_damage_dealt,
            )?,
            total_damage_dealt_to_champions: ctx.scalar(
                "totalDamageDealtToChampions",
                &self.total_damage_dealt_to_champions,
                &o.total_damage_dealt_to_champions,
            )?,
            total_damage_taken: ctx.scalar(
                "totalDamageTaken",
                &self.total_damage_taken,
                &o.total_damage_taken,
            )?,
            damage_dealt_to_objectives: ctx.scalar(
                "damageDealtToObjectives",
                &self.damage_dealt_to_objectives,
                &o.damage_dealt_to_objectives,
            )?,
            total_heal: ctx.scalar("totalHeal", &self.total_heal, &o.total_heal)?,
            longest_time_spent_living: ctx.scalar(
                "longestTimeSpentLiving",
                &self.longest_time_spent_living,
                &o.longest_time_spent_living,
            )?,
            gold_spent: ctx.scalar("goldSpent", &self.gold_spent, &o.gold_spent)?,
            items: ctx.list("items", &self.items, &o.items)?,
        })
    }
}

impl DeepMerge for Snapshot {
    fn deep_merge(&self, o: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            timestamp: ctx.required("timestamp", &self.timestamp, &o.timestamp)?,
            position: ctx.scalar("position", &self.position, &o.position)?,
            current_gold: ctx.scalar("currentGold", &self.current_gold, &o.current_gold)?,
            total_gold: ctx.scalar("totalGold", &self.total_gold, &o.total_gold)?,
            xp: ctx.scalar("xp", &self.xp, &o.xp)?,
            level: ctx.scalar("level", &self.level, &o.level)?,
            cs: ctx.scalar("cs", &self.cs, &o.cs)?,
            monsters_killed: ctx.scalar(
                "monstersKilled",
                &self.monsters_killed,
                &o.monsters_killed,
            )?,
            is_alive: ctx.scalar("isAlive", &self.is_alive, &o.is_alive)?,
            spell1_available: ctx.scalar(
                "spell1Available",
                &self.spell1_available,
                &o.spell1_available,
            )?,
            spell2_available: ctx.scalar(
                "spell2Available",
                &self.spell2_available,
                &o.spell2_available,
            )?,
            ultimate_available: ctx.scalar(
                "ultimateAvailable",
                &self.ultimate_available,
                &o.ultimate_available,
            )?,
            champion_stats: ctx.record("championStats", &self.champion_stats, &o.champion_stats)?,
            damage_stats: ctx.record("damageStats", &self.damage_stats, &o.damage_stats)?,
        })
    }
}

impl DeepMerge for ChampionStats {
    fn deep_merge(&self, o: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            ability_haste: ctx.scalar("abilityHaste", &self.ability_haste, &o.ability_haste)?,
            ability_power: ctx.scalar("abilityPower", &self.ability_power, &o.ability_power)?,
            armor: ctx.scalar("armor", &self.armor, &o.armor)?,
            attack_damage: ctx.scalar("attackDamage", &self.attack_damage, &o.attack_damage)?,
            attack_speed: ctx.scalar("attackSpeed", &self.attack_speed, &o.attack_speed)?,
            health: ctx.scalar("health", &self.health, &o.health)?,
            health_max: ctx.scalar("healthMax", &self.health_max, &o.health_max)?,
            magic_resist: ctx.scalar("magicResist", &self.magic_resist, &o.magic_resist)?,
            movement_speed: ctx.scalar("movementSpeed", &self.movement_speed, &o.movement_speed)?,
            power: ctx.scalar("power", &self.power, &o.power)?,
            power_max: ctx.scalar("powerMax", &self.power_max, &o.power_max)?,
        })
    }
}

impl DeepMerge for DamageStats {
    fn deep_merge(&self, o: &Self, ctx: &mut MergeContext) -> MergeResult<Self> {
        Ok(Self {
            magic_damage_done: ctx.scalar(
                "magicDamageDone",
                &self.magic_damage_done,
                &o.magic_damage_done,
            )?,
            magic_damage_done_to_champions: ctx.scalar(
                "magicDamageDoneToChampions",
                &self.magic_damage_done_to_champions,
                &o.magic_damage_done_to_champions,
            )?,
            magic_damage_taken: ctx.scalar(
                "magicDamageTaken",
                &self.magic_damage_taken,
                &o.magic_damage_taken,
            )?,
            physical_damage_done: ctx.scalar(
                "physicalDamageDone",
                &self.physical_damage_done,
                &o.physical_damage_done,
            )?,
            physical_damage_done_to_champions: ctx.scalar(
                "physicalDamageDoneToChampions",
                &self.physical_damage_done_to_champions,
                &o.physical_damage_done_to_champions,
            )?,
            physical_damage_taken: ctx.scalar(
                "physicalDamageTaken",
                &self.physical_damage_taken,
                &o.physical_damage_taken,
            )?,
            true_damage_done: ctx.scalar(
                "trueDamageDone",
                &self.true_damage_done,
                &o.true_damage_done,
            )?,
            true_damage_done_to_champions: ctx.scalar(
                "trueDamageDoneToChampions",
                &self.true_damage_done_to_champions,
                &o.true_damage_done_to_champions,
            )?,
            true_damage_taken: ctx.scalar(
                "trueDamageTaken",
                &self.true_damage_taken,
                &o.true_damage_taken,
            )?,
            total_damage_done: ctx.scalar(
                "totalDamageDone",
                &self.total_damage_done,
                &o.total_damage_done,
            )?,
            total_damage_done_to_champions: ctx.scalar(
                "totalDamageDoneToChampions",
                &self.total_damage_done_to_champions,
                &o.total_damage_done_to_champions,
            )?,
            total_damage_taken: ctx.scalar(
                "totalDamageTaken",
                &self.total_damage_taken,
                &o.total_damage_taken,
            )?,
        })
    }
}
