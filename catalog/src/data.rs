use crate::{Category, Product};

// all product demos currently share the site reel, which is also the home
// page hero background
pub const DEMO_REEL: &str = "/home.mp4";

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "underwater",
        title: "Underwater",
        route: "/underwater",
        description: "Explore the depths with our advanced underwater robotics",
        products: &[
            Product {
                id: "alpha",
                title: "Alpha",
                description: "Advanced underwater exploration platform",
                image_url: "/Underwater/Alpha-1536x864.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "rov",
                title: "ROV",
                description: "Remotely Operated Vehicle for deep sea operations",
                image_url: "/Underwater/ROV-1536x864.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "luna",
                title: "Luna",
                description: "Compact autonomous underwater vehicle",
                image_url: "/Underwater/Luna-1536x864.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "arvi",
                title: "ARVi",
                description: "Advanced Research Vehicle for underwater inspection",
                image_url: "/Underwater/ARVi-2023-version-web-materials-e1691747311126-1536x855.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "boxfish-auv",
                title: "Boxfish AUV",
                description: "Autonomous Underwater Vehicle with 4K camera",
                image_url: "/Underwater/Boxfsih-AUV-4K-camera-head-left-1536x1152.png",
                video_url: Some(DEMO_REEL),
            },
        ],
    },
    Category {
        id: "surfacewater",
        title: "Surface Water",
        route: "/surfacewater",
        description: "Navigate surface waters with precision and efficiency",
        products: &[
            Product {
                id: "apache4-usv",
                title: "APACHE4 USV",
                description: "Unmanned Surface Vehicle for ADCP surveys",
                image_url: "/Surfacewater/APACHE4-USV-for-ADCP-surveys-1-e1648122399229.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "mariner-x-usv",
                title: "Mariner X USV",
                description: "Advanced surface vehicle for maritime operations",
                image_url: "/Surfacewater/the-mariner-x-usv.webp",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "tactical-amy-usv",
                title: "Tactical AMY USV",
                description: "Tactical Autonomous Maritime Yacht",
                image_url: "/Surfacewater/Tactical-AMY-USV.webp",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "hound-reckless-usv",
                title: "Hound Reckless USV",
                description: "High-performance unmanned surface vehicle",
                image_url: "/Surfacewater/Hound-Reckless-usv.webp",
                video_url: Some(DEMO_REEL),
            },
        ],
    },
    Category {
        id: "land",
        title: "Land",
        route: "/land",
        description: "Ground-based robotic solutions for all terrains",
        products: &[
            Product {
                id: "husky-a300",
                title: "Husky A300",
                description: "All-terrain robotic platform",
                image_url: "/Land/HuskyA300_Menu_Image.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "warthog",
                title: "Warthog",
                description: "Heavy-duty ground vehicle",
                image_url: "/Land/warthog-menu.jpg",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "dingo",
                title: "Dingo",
                description: "Compact and agile land robot",
                image_url: "/Land/dingo-menu-1.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "jackal",
                title: "Jackal",
                description: "Fast reconnaissance vehicle",
                image_url: "/Land/jackal.jpg",
                video_url: Some(DEMO_REEL),
            },
        ],
    },
    Category {
        id: "air",
        title: "Air",
        route: "/air",
        description: "Take to the skies with our aerial platforms",
        products: &[
            Product {
                id: "aerial-platform-1",
                title: "Aerial Platform 1",
                description: "Advanced aerial surveillance platform",
                image_url: "/Air/6e82e273e1d05044bc6f02a278df51eb.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "aerial-platform-2",
                title: "Aerial Platform 2",
                description: "High-performance aerial vehicle",
                image_url: "/Air/133dbcbded142391e8ed57d0fcd57ac8.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "aerial-platform-3",
                title: "Aerial Platform 3",
                description: "Professional drone platform",
                image_url: "/Air/ae5d8b9987be8d5ecdeb5d502a1e887c.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "aerial-platform-4",
                title: "Aerial Platform 4",
                description: "Enterprise-grade aerial system",
                image_url: "/Air/979ab68fd602bd3440fc4fb12f3ea38e.png",
                video_url: Some(DEMO_REEL),
            },
            Product {
                id: "aerial-platform-5",
                title: "Aerial Platform 5",
                description: "Commercial aerial platform",
                image_url: "/Air/3be8aaab8409e1575c6363658007b517.png",
                video_url: Some(DEMO_REEL),
            },
        ],
    },
];
