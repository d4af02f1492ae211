// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! The wiki's built-in catalog.
//!
//! Kept in the same order as the site's sidebar: rules, guides, jobs,
//! commands, FAQ. Order matters: equal-score results keep it.

use crate::types::{Category, Record};

struct Entry {
    title: &'static str,
    category: Category,
    description: &'static str,
    url: &'static str,
    keywords: &'static [&'static str],
}

impl Entry {
    fn to_record(&self) -> Record {
        Record {
            title: self.title.to_string(),
            category: self.category,
            description: self.description.to_string(),
            url: self.url.to_string(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Records of the built-in catalog, in sidebar order.
pub fn builtin_records() -> Vec<Record> {
    ENTRIES.iter().map(Entry::to_record).collect()
}

const ENTRIES: &[Entry] = &[
    // Rules
    Entry {
        title: "Respect et Courtoisie",
        category: Category::Rules,
        description: "Tout manque de respect envers les autres joueurs ou le staff est strictement interdit.",
        url: "/rules#regles-generales",
        keywords: &["respect", "courtoisie", "politesse", "comportement"],
    },
    Entry {
        title: "Langage Approprié",
        category: Category::Rules,
        description: "Les insultes, propos discriminatoires ou haineux ne sont pas tolérés.",
        url: "/rules#regles-generales",
        keywords: &["langage", "insultes", "discrimination", "haine"],
    },
    Entry {
        title: "Publicité Interdite",
        category: Category::Rules,
        description: "Toute forme de publicité pour d'autres serveurs ou services externes est interdite.",
        url: "/rules#regles-generales",
        keywords: &["publicité", "spam", "promotion", "serveur"],
    },
    Entry {
        title: "Choix de Métier",
        category: Category::Rules,
        description: "Chaque joueur peut choisir librement son métier et en changer à tout moment.",
        url: "/rules#regles-metiers",
        keywords: &["métier", "job", "choix", "liberté"],
    },
    Entry {
        title: "Entraide Encouragée",
        category: Category::Rules,
        description: "L'échange de ressources et l'entraide entre joueurs sont fortement encouragés.",
        url: "/rules#regles-metiers",
        keywords: &["entraide", "échange", "ressources", "coopération"],
    },
    Entry {
        title: "Ambiance Chill",
        category: Category::Rules,
        description: "Le serveur privilégie une ambiance détendue et conviviale.",
        url: "/rules#regles-gameplay",
        keywords: &["chill", "détendu", "ambiance", "convivial"],
    },
    Entry {
        title: "Griefing Interdit",
        category: Category::Rules,
        description: "Détruire ou saboter le travail d'autres joueurs volontairement est strictement interdit.",
        url: "/rules#regles-gameplay",
        keywords: &["griefing", "destruction", "sabotage", "vandalisme"],
    },
    Entry {
        title: "Sanctions",
        category: Category::Rules,
        description: "Système de sanctions : avertissement, kick temporaire, bannissement.",
        url: "/rules#sanctions",
        keywords: &["sanctions", "avertissement", "kick", "ban", "bannissement"],
    },
    // Guides
    Entry {
        title: "Comment Rejoindre le Serveur",
        category: Category::Guides,
        description: "Instructions complètes pour vous connecter à Capitalyx pour la première fois.",
        url: "/guides#guides-debutant",
        keywords: &["rejoindre", "connexion", "serveur", "FiveM", "débutant"],
    },
    Entry {
        title: "Création de Personnage",
        category: Category::Guides,
        description: "Guide pour créer votre personnage et choisir votre orientation business.",
        url: "/guides#guides-debutant",
        keywords: &["création", "personnage", "character", "business", "entrepreneur"],
    },
    Entry {
        title: "Lieux de Production",
        category: Category::Guides,
        description: "Découvrez les zones clés pour développer votre business.",
        url: "/guides#zones-activite",
        keywords: &["production", "zones", "fermes", "mines", "commerce", "entrepôts"],
    },
    Entry {
        title: "Choisir son Métier",
        category: Category::Guides,
        description: "Guide pour sélectionner le métier qui correspond à votre style de jeu.",
        url: "/guides#metiers-business",
        keywords: &["métier", "fermier", "mineur", "commerçant", "transporteur"],
    },
    Entry {
        title: "Système d'Échanges",
        category: Category::Guides,
        description: "Comment commercer avec d'autres joueurs et bénéficier des bonus de groupe.",
        url: "/guides#metiers-business",
        keywords: &["échanges", "commerce", "troc", "marché", "bonus"],
    },
    Entry {
        title: "Communication",
        category: Category::Guides,
        description: "Guide des différents moyens de communiquer et collaborer.",
        url: "/guides#communication",
        keywords: &["communication", "chat", "équipe", "collaboration"],
    },
    Entry {
        title: "Factions et Bonus",
        category: Category::Guides,
        description: "Les factions offrent des avantages pour optimiser votre progression.",
        url: "/guides#factions",
        keywords: &["factions", "bonus", "XP", "avantages", "événements"],
    },
    // Jobs
    Entry {
        title: "Chauffeur de Taxi",
        category: Category::Jobs,
        description: "Transport de passagers et missions de taxi.",
        url: "/jobs/cab",
        keywords: &["taxi", "chauffeur", "transport", "passagers"],
    },
    Entry {
        title: "Chauffeur de Bus",
        category: Category::Jobs,
        description: "Transport public et lignes de bus.",
        url: "/jobs/busdriver",
        keywords: &["bus", "transport", "public", "lignes"],
    },
    Entry {
        title: "Livreur",
        category: Category::Jobs,
        description: "Livraison et transport de colis.",
        url: "/jobs/courier",
        keywords: &["livraison", "colis", "coursier", "transport"],
    },
    Entry {
        title: "Conducteur de Train",
        category: Category::Jobs,
        description: "Conduite de trains sur le réseau ferroviaire.",
        url: "/jobs/trainconductor",
        keywords: &["train", "conducteur", "ferroviaire", "transport"],
    },
    Entry {
        title: "Chauffeur de Camion",
        category: Category::Jobs,
        description: "Transport de marchandises et livraisons longue distance.",
        url: "/jobs/truckdriver",
        keywords: &["camion", "truck", "marchandises", "livraison", "fret"],
    },
    Entry {
        title: "Pilote d'Avion",
        category: Category::Jobs,
        description: "Transport aérien de passagers et de fret.",
        url: "/jobs/avionpilot",
        keywords: &["avion", "pilote", "aviation", "vol", "aérien"],
    },
    Entry {
        title: "Pilote d'Hélicoptère",
        category: Category::Jobs,
        description: "Missions en hélicoptère et transport spécialisé.",
        url: "/jobs/helicopterdriver",
        keywords: &["hélicoptère", "helicopter", "pilote", "missions", "transport"],
    },
    Entry {
        title: "Services d'Urgence (EMS)",
        category: Category::Jobs,
        description: "Services médicaux d'urgence et assistance aux joueurs.",
        url: "/jobs/ems",
        keywords: &["ems", "urgence", "médical", "ambulance", "secours", "santé"],
    },
    // Commands
    Entry {
        title: "/pay [id] [montant]",
        category: Category::Commands,
        description: "Donne de l'argent liquide à un autre joueur.",
        url: "/commands",
        keywords: &["pay", "payer", "argent", "donation", "transfer"],
    },
    Entry {
        title: "/trade",
        category: Category::Commands,
        description: "Proposer un échange avec un autre joueur.",
        url: "/commands",
        keywords: &["trade", "échange", "commerce", "troc"],
    },
    Entry {
        title: "/help",
        category: Category::Commands,
        description: "Demander de l'aide aux autres joueurs ou au staff.",
        url: "/commands",
        keywords: &["help", "aide", "assistance", "support"],
    },
    Entry {
        title: "/market",
        category: Category::Commands,
        description: "Accéder au marché pour acheter et vendre.",
        url: "/commands",
        keywords: &["market", "marché", "achat", "vente"],
    },
    Entry {
        title: "/team",
        category: Category::Commands,
        description: "Communication d'équipe pour coordonner les actions.",
        url: "/commands",
        keywords: &["team", "équipe", "coordination", "communication"],
    },
    // Faq
    Entry {
        title: "Questions Fréquentes",
        category: Category::Faq,
        description: "Réponses aux questions les plus courantes sur Capitalyx.",
        url: "/faq",
        keywords: &["faq", "questions", "réponses", "problèmes", "aide"],
    },
];
