/// Per-category repair templates.
///
/// Placeholders: `{model}` (display name, brand included), `{brand}`, and
/// `{display_desc}` (problem phrase for the general template).
use crate::model::ProblemCategory;

#[derive(Debug)]
pub struct PartTemplate {
    pub name: &'static str,
    pub search_query: &'static str,
}

#[derive(Debug)]
pub struct ProblemTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub possible_causes: &'static [&'static str],
    pub solution_steps: &'static [&'static str],
    pub required_parts: &'static [PartTemplate],
}

/// Template for a category. Every category has one.
pub fn problem_template(category: ProblemCategory) -> &'static ProblemTemplate {
    match category {
        ProblemCategory::Battery => &BATTERY,
        ProblemCategory::Charging => &CHARGING,
        ProblemCategory::Filter => &FILTER,
        ProblemCategory::Power => &POWER,
        ProblemCategory::Brush => &BRUSH,
        ProblemCategory::Suction => &SUCTION,
        ProblemCategory::Connectivity => &CONNECTIVITY,
        ProblemCategory::ErrorCodes => &ERROR_CODES,
        ProblemCategory::Attachment => &ATTACHMENT,
        ProblemCategory::Motor => &MOTOR,
        ProblemCategory::Belt => &BELT,
        ProblemCategory::Leak => &LEAK,
        ProblemCategory::Pulsing => &PULSING,
        ProblemCategory::Noise => &NOISE,
        ProblemCategory::Heating => &HEATING,
        ProblemCategory::Mapping => &MAPPING,
        ProblemCategory::General => &GENERAL,
    }
}

static BATTERY: ProblemTemplate = ProblemTemplate {
    id: "battery-replacement",
    title: "How to Replace {model} Battery",
    description: "Step-by-step guide to replace the battery in your {model}. Restore runtime and performance with a new battery.",
    possible_causes: &[
        "Battery has degraded after 2-3 years of regular use",
        "Battery cells have failed due to age or heat",
        "Battery is not holding charge for more than 10 minutes",
        "Charging cycles have exceeded the battery's lifespan",
        "Battery has been stored at low charge for extended periods",
    ],
    solution_steps: &[
        "Purchase a genuine replacement battery compatible with {model}",
        "Power off the vacuum completely and remove from charger",
        "Locate the battery compartment on your {model} (typically on the rear or bottom panel)",
        "Use a suitable screwdriver to remove the battery cover screws",
        "Carefully disconnect the old battery connector, noting the polarity",
        "Remove the old battery and inspect the compartment for any damage",
        "Install the new battery, ensuring correct polarity (+ and - alignment)",
        "Secure the battery compartment cover and tighten all screws",
        "Charge your {model} for 4-6 hours before the first use",
    ],
    required_parts: &[PartTemplate {
        name: "{model} Replacement Battery",
        search_query: "{model} battery",
    }],
};

static CHARGING: ProblemTemplate = ProblemTemplate {
    id: "charging-issues",
    title: "Charging Problems & Solutions",
    description: "Troubleshooting and fixing charging issues with {model}.",
    possible_causes: &[
        "Dirty charging contacts",
        "Faulty charger or docking station",
        "Battery cannot accept charge anymore",
        "Charging port damage",
    ],
    solution_steps: &[
        "Clean the metal contacts on both vacuum and charger",
        "Try a different power outlet",
        "Check if the charger LED indicator is working",
        "Inspect the charging port for debris or damage",
        "Test with a different charger if available",
        "If charger is faulty, replace with genuine {brand} charger",
    ],
    required_parts: &[PartTemplate {
        name: "{model} Charger",
        search_query: "{model} charger replacement",
    }],
};

static FILTER: ProblemTemplate = ProblemTemplate {
    id: "filter-maintenance",
    title: "Filter Cleaning & Replacement",
    description: "Proper filter maintenance for optimal performance of {model}.",
    possible_causes: &[
        "Filter is clogged with dust and debris",
        "Filter hasn't been cleaned recently",
        "Filter is damaged or torn",
        "Using wrong filter type",
    ],
    solution_steps: &[
        "Check the filter indicator light (if available)",
        "Remove the pre-filter and post-filter",
        "Tap the filter to remove loose dust",
        "Rinse with cold water only (no soap)",
        "Shake gently and let air dry for 24 hours",
        "Replace if filter is damaged or performance doesn't improve",
    ],
    required_parts: &[PartTemplate {
        name: "{model} Replacement Filter",
        search_query: "{model} filter",
    }],
};

static POWER: ProblemTemplate = ProblemTemplate {
    id: "power-issues",
    title: "Vacuum Won't Turn On or Start",
    description: "Diagnosing why your {model} won't power on.",
    possible_causes: &[
        "Battery is completely drained",
        "Battery is dead and needs replacement",
        "Power button malfunction",
        "Internal electrical fault",
    ],
    solution_steps: &[
        "Charge the vacuum for at least 4 hours",
        "Check all connections are secure",
        "Test the power button responsiveness",
        "Look for any error lights or beeps",
        "If completely dead, battery replacement is likely needed",
    ],
    required_parts: &[PartTemplate {
        name: "{model} Diagnostic Tool",
        search_query: "{model} troubleshooting",
    }],
};

static BRUSH: ProblemTemplate = ProblemTemplate {
    id: "brush-roll-issues",
    title: "Brush Roll Not Spinning",
    description: "Fixing brush roll problems on {model}.",
    possible_causes: &[
        "Debris tangled around brush roll",
        "Brush roll belt is broken",
        "Motor for brush roll failed",
        "Obstruction preventing rotation",
    ],
    solution_steps: &[
        "Turn off and unplug the vacuum",
        "Remove the brush roll cover",
        "Clean all hair and debris from brush roll",
        "Check the belt for wear or damage",
        "Test brush roll motor (if applicable)",
        "Replace belt or brush roll if needed",
    ],
    required_parts: &[PartTemplate {
        name: "{model} Brush Roll",
        search_query: "{model} brush roll replacement",
    }],
};

static SUCTION: ProblemTemplate = ProblemTemplate {
    id: "low-suction",
    title: "Loss of Suction Power",
    description: "Restoring suction power to your {model}.",
    possible_causes: &[
        "Clogged filters or dust bin",
        "Blockage in the wand or hose",
        "Brush roll not spinning",
        "Dust bin is overfilled",
    ],
    solution_steps: &[
        "Empty the dust bin completely",
        "Clean or replace all filters",
        "Check for blockages in the vacuum head",
        "Inspect the wand and hose for clogs",
        "Remove any debris from the air pathways",
        "Test suction after each step",
    ],
    required_parts: &[PartTemplate {
        name: "{model} Replacement Filter",
        search_query: "{model} suction problem",
    }],
};

static CONNECTIVITY: ProblemTemplate = ProblemTemplate {
    id: "wifi-connectivity",
    title: "WiFi & App Connection Issues",
    description: "Fixing connectivity problems with {model}.",
    possible_causes: &[
        "WiFi network changed",
        "App needs update",
        "Firmware outdated",
        "Router interference",
    ],
    solution_steps: &[
        "Ensure vacuum is in WiFi coverage area",
        "Update the companion app to latest version",
        "Reset vacuum's WiFi connection",
        "Restart your router",
        "Reconnect through the app step by step",
        "Update vacuum firmware if available",
    ],
    required_parts: &[PartTemplate {
        name: "{model} App",
        search_query: "{model} app download",
    }],
};

static ERROR_CODES: ProblemTemplate = ProblemTemplate {
    id: "error-codes-troubleshooting",
    title: "{model} Error Codes Explained",
    description: "Understanding and resolving error codes on your {model}. Complete error code reference with solutions.",
    possible_causes: &[
        "Brush roll obstruction detected by sensors",
        "Battery communication failure",
        "Motor overload or overheating",
        "Filter clogged or not properly installed",
        "Internal sensor malfunction",
        "PCB board error detected",
    ],
    solution_steps: &[
        "Turn off your {model} and wait 30 seconds",
        "Check for any visible obstructions in the brush roll area",
        "Remove and clean all filters thoroughly",
        "Ensure the dust bin is properly installed and not overfilled",
        "Check battery connections and terminals for corrosion",
        "Look up the specific error code in the user manual",
        "If error persists after troubleshooting, contact {brand} support",
        "Consider resetting the vacuum by removing the battery for 1 minute",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Replacement Filter",
            search_query: "{model} filter",
        },
        PartTemplate {
            name: "{model} Brush Roll",
            search_query: "{model} brush roll",
        },
    ],
};

static ATTACHMENT: ProblemTemplate = ProblemTemplate {
    id: "attachment-troubleshooting",
    title: "{model} Attachment & Accessory Problems",
    description: "Solving issues with attachments, tools, and accessories for your {model}. Fix loose or malfunctioning attachments.",
    possible_causes: &[
        "Attachment not properly locked into place",
        "Connection mechanism is dirty or damaged",
        "Accessory release button is stuck or broken",
        "Wand or hose is clogged with debris",
        "Electrical contacts are dirty or corroded",
        "Attachment motor has failed",
    ],
    solution_steps: &[
        "Remove all attachments from your {model} and inspect them",
        "Clean the connection points with a dry cloth",
        "Check the release mechanism for debris or damage",
        "Test each attachment individually to identify the problematic one",
        "Lubricate moving parts if applicable (check manual first)",
        "Ensure attachments are fully clicked into position",
        "Inspect the electrical contacts for corrosion or dirt",
        "Replace the attachment if the issue persists after cleaning",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Replacement Attachment",
            search_query: "{model} attachment",
        },
        PartTemplate {
            name: "{model} Wand or Hose",
            search_query: "{model} wand hose",
        },
    ],
};

static MOTOR: ProblemTemplate = ProblemTemplate {
    id: "motor-replacement",
    title: "How to Replace {model} Motor",
    description: "Complete motor replacement guide for {model}. Fix loud noises, burning smells, or complete motor failure.",
    possible_causes: &[
        "Motor bearings have worn out after years of use",
        "Motor has overheated and windings are damaged",
        "Foreign object damaged the motor fan or impeller",
        "Water or liquid damage to motor electronics",
        "Electrical surge or short circuit burned motor",
        "Brushes have worn down (for brushed motors)",
    ],
    solution_steps: &[
        "Confirm the motor is the issue on your {model} (listen for unusual sounds)",
        "Purchase a compatible replacement motor specific to {model}",
        "Remove the battery and any external covers",
        "Document all wire connections with photos before disconnecting",
        "Carefully disconnect all motor electrical connectors",
        "Remove mounting screws securing the motor housing",
        "Lift out the old motor from your {model} carefully",
        "Install the new motor and reconnect all wires matching your photos",
        "Reassemble in reverse order and test operation",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Replacement Motor",
            search_query: "{model} motor",
        },
        PartTemplate {
            name: "Motor Wiring Harness",
            search_query: "{model} wire harness",
        },
    ],
};

static BELT: ProblemTemplate = ProblemTemplate {
    id: "belt-replacement",
    title: "How to Replace {model} Belt",
    description: "Step-by-step belt replacement guide for {model}. Fix brush roll not spinning or loss of cleaning power.",
    possible_causes: &[
        "Belt has stretched or worn over time",
        "Belt has broken due to age or obstruction",
        "Belt slipped off the pulley due to debris",
        "Belt melted from motor friction or overheating",
        "Brush roll seized causing belt failure",
        "Poor maintenance led to premature belt wear",
    ],
    solution_steps: &[
        "Purchase the correct replacement belt for {model}",
        "Remove the battery and bottom plate from {model}",
        "Remove the brush roll and set aside",
        "Clean any debris or hair from the pulley area",
        "Remove the old belt from both motor and brush roll pulleys",
        "Install the new belt, ensuring proper tension",
        "Verify the belt sits correctly in the pulley grooves",
        "Reinstall the brush roll and test rotation",
        "Reassemble the vacuum and test operation",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Replacement Belt",
            search_query: "{model} belt",
        },
        PartTemplate {
            name: "Brush Roll (recommended to replace together)",
            search_query: "{model} brush roll",
        },
    ],
};

static LEAK: ProblemTemplate = ProblemTemplate {
    id: "leak-troubleshooting",
    title: "{model} Leaking Water or Solution",
    description: "Fixing leak issues on your {model}. Stop water or cleaning solution from dripping during use.",
    possible_causes: &[
        "Dirty tank cap seal or O-ring is damaged",
        "Crack in the clean or dirty water tank",
        "Overfilled tank causing overflow during operation",
        "Loose hose connection inside the vacuum",
        "Damaged spray nozzle or valve",
        "Seal degraded on the brush nozzle assembly",
    ],
    solution_steps: &[
        "Empty both tanks from your {model} completely",
        "Inspect tank caps for damaged or missing seals",
        "Check both clean and dirty tanks for cracks or damage",
        "Examine all hose connections for tightness",
        "Test the spray trigger to see if it leaks continuously",
        "Clean the spray nozzle with warm water to remove clogs",
        "Replace the tank cap or nozzle assembly if damaged",
        "Ensure tanks are not filled above the MAX line",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Replacement Tank Cap",
            search_query: "{model} tank cap",
        },
        PartTemplate {
            name: "{model} Spray Nozzle",
            search_query: "{model} spray nozzle",
        },
    ],
};

static PULSING: ProblemTemplate = ProblemTemplate {
    id: "pulsing-troubleshooting",
    title: "{model} Pulsing or Surging Power",
    description: "Fixing pulsing, surging, or inconsistent power on your {model}. Understand why power fluctuates and how to resolve it.",
    possible_causes: &[
        "Dirty or clogged filters causing airflow restriction",
        "Bin is overfilled restricting airflow",
        "Brush roll is obstructed causing resistance changes",
        "Motor is failing and power delivery is inconsistent",
        "PCB board issue causing voltage fluctuations",
        "Battery is failing and cannot deliver consistent power",
    ],
    solution_steps: &[
        "Empty and clean the dust bin on your {model}",
        "Remove and clean all filters (let them dry completely for 24 hours)",
        "Clean the brush roll and remove any tangled hair or debris",
        "Check for any blockages in the air pathways",
        "Test with a fully charged battery to rule out power issues",
        "If pulsing continues, the motor or PCB may need replacement",
        "Contact {brand} support if the issue persists after cleaning",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Replacement Filter",
            search_query: "{model} filter",
        },
        PartTemplate {
            name: "{model} Replacement Motor",
            search_query: "{model} motor",
        },
    ],
};

static NOISE: ProblemTemplate = ProblemTemplate {
    id: "noise-troubleshooting",
    title: "{model} Making Loud or Unusual Noises",
    description: "Diagnosing and fixing loud noises from your {model}. Grinding, screaming, rattling, or high-pitched sounds explained.",
    possible_causes: &[
        "Debris caught in the brush roll or impeller",
        "Worn-out bearings in the motor or brush roll",
        "Broken or damaged belt flopping around",
        "Loose screws or components vibrating",
        "Stone or hard object damaging internal parts",
        "Motor armature rubbing against the housing",
    ],
    solution_steps: &[
        "Turn off your {model} immediately to prevent further damage",
        "Remove the brush roll and clean thoroughly",
        "Inspect the belt for signs of wear or damage",
        "Check for any loose screws or components and tighten",
        "Run the vacuum without the brush head to isolate the noise source",
        "If noise comes from the main body, the motor may be failing",
        "Contact manufacturer support for repair if motor related",
        "Consider professional repair service for complex mechanical issues",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Brush Roll",
            search_query: "{model} brush roll",
        },
        PartTemplate {
            name: "{model} Belt",
            search_query: "{model} belt",
        },
    ],
};

static HEATING: ProblemTemplate = ProblemTemplate {
    id: "heating-troubleshooting",
    title: "{model} Not Heating Properly",
    description: "Fixing heating issues on your {model}. Restore steam or hot water cleaning functionality.",
    possible_causes: &[
        "Heating element has burned out or failed",
        "Thermal fuse has blown due to overheating",
        "PCB board issue preventing heater activation",
        "Water tank is empty or not properly seated",
        "Scale or mineral buildup blocking heating element",
        "Pump failure preventing water circulation to heater",
    ],
    solution_steps: &[
        "Ensure the water tank on your {model} is filled",
        "Check that the tank is properly seated and detected",
        "Clean the heating element with vinegar to remove scale buildup",
        "Inspect the thermal fuse for continuity",
        "Test the heater with a multimeter for power supply",
        "Check all electrical connections to the heating element",
        "Replace the heating element or thermal fuse if defective",
        "Run a descaling cycle if available on your model",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Heating Element",
            search_query: "{model} heater",
        },
        PartTemplate {
            name: "{model} Thermal Fuse",
            search_query: "{model} thermal fuse",
        },
    ],
};

static MAPPING: ProblemTemplate = ProblemTemplate {
    id: "mapping-troubleshooting",
    title: "{model} Navigation & Mapping Problems",
    description: "Fixing mapping, navigation, and getting lost issues on your {model}. Restore proper cleaning path coverage.",
    possible_causes: &[
        "Wheel encoders are dirty or obstructed",
        "Bumper sensors are not detecting obstacles properly",
        "Cliff sensors are dirty or miscalibrated",
        "Firmware needs updating for better navigation",
        "Battery low causing navigation failures",
        "Home base location has moved or is obstructed",
    ],
    solution_steps: &[
        "Clean all wheels and encoders on your {model} with a dry cloth",
        "Wipe the bumper sensors and cliff sensors with a damp microfiber cloth",
        "Perform a factory reset on your {model} (this will clear the map)",
        "Update to the latest firmware for improved navigation algorithms",
        "Clear the home base area of obstacles",
        "Let your {model} complete a full mapping cycle in a small room first",
        "Ensure adequate lighting for better camera and sensor performance",
        "Check wheel performance - stuck wheels cause mapping errors",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Wheel Assembly",
            search_query: "{model} wheel",
        },
        PartTemplate {
            name: "{model} Sensor Array",
            search_query: "{model} sensors",
        },
    ],
};

static GENERAL: ProblemTemplate = ProblemTemplate {
    id: "general-troubleshooting",
    title: "How to Fix {display_desc}",
    description: "Complete troubleshooting and repair guide for {display_desc}. Diagnostic steps, common problems, and professional solutions to restore your {model} to optimal performance.",
    possible_causes: &[
        "Normal wear and tear on {model} components",
        "Lack of regular maintenance and cleaning",
        "Specific part failure or degradation",
        "Usage beyond recommended capacity",
        "Environmental factors (dust, moisture, temperature)",
        "Age-related performance decline",
    ],
    solution_steps: &[
        "Identify the specific issue with your {model} - note any unusual sounds, lights, or behaviors",
        "Consult the official user manual for model-specific troubleshooting guidance",
        "Perform basic diagnostics: check filters, inspect brush rolls, test battery performance",
        "Clean all accessible parts of your {model} including filters, brush rolls, and dust bins",
        "Ensure proper charging and battery health for cordless models",
        "Inspect for visible damage, blockages, or worn parts that may need replacement",
        "Test the vacuum after each troubleshooting step to isolate the problem",
        "If the issue persists, consider professional repair service or replacement parts for your {model}",
        "Contact manufacturer support for warranty service or authorized repair centers",
    ],
    required_parts: &[
        PartTemplate {
            name: "{model} Replacement Parts",
            search_query: "{model} parts",
        },
        PartTemplate {
            name: "{model} Maintenance Kit",
            search_query: "{model} filter",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_complete_template() {
        for category in ProblemCategory::ALL {
            let t = problem_template(category);
            assert!(!t.id.is_empty(), "{category} id");
            assert!(!t.title.is_empty(), "{category} title");
            assert!(!t.possible_causes.is_empty(), "{category} causes");
            assert!(!t.solution_steps.is_empty(), "{category} steps");
            assert!(!t.required_parts.is_empty(), "{category} parts");
        }
    }

    #[test]
    fn test_template_ids_are_unique() {
        let ids: HashSet<&str> = ProblemCategory::ALL
            .iter()
            .map(|c| problem_template(*c).id)
            .collect();
        assert_eq!(ids.len(), ProblemCategory::ALL.len());
    }

    #[test]
    fn test_power_template_id() {
        assert_eq!(problem_template(ProblemCategory::Power).id, "power-issues");
    }
}
