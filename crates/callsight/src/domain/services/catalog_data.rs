//! Built-in industry templates

use crate::domain::entities::IndustryTemplate;

pub(super) struct TemplateDef {
    pub id: &'static str,
    pub display_name: &'static str,
    pub context: &'static str,
    pub evaluation_criteria: &'static [&'static str],
    pub compliance_requirements: &'static [&'static str],
    pub terminology: &'static [&'static str],
    pub common_objections: &'static [&'static str],
    pub red_flag_indicators: &'static [&'static str],
    pub quality_markers: &'static [&'static str],
}

impl TemplateDef {
    pub fn to_template(&self) -> IndustryTemplate {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        IndustryTemplate {
            id: self.id.to_string(),
            display_name: self.display_name.to_string(),
            context: self.context.to_string(),
            evaluation_criteria: owned(self.evaluation_criteria),
            compliance_requirements: owned(self.compliance_requirements),
            terminology: owned(self.terminology),
            common_objections: owned(self.common_objections),
            red_flag_indicators: owned(self.red_flag_indicators),
            quality_markers: owned(self.quality_markers),
        }
    }
}

pub(super) const GENERAL_TEMPLATE: TemplateDef = TemplateDef {
    id: "general",
    display_name: "General Business",
    context: "A general business conversation between a company representative and a customer or prospect. Evaluate professionalism, clarity, and whether the customer's needs were understood and addressed.",
    evaluation_criteria: &[
        "Professional greeting and introduction",
        "Active listening and needs discovery",
        "Clear and accurate communication",
        "Handling of questions and objections",
        "Agreement on next steps",
        "Courtesy and empathy throughout the call",
    ],
    compliance_requirements: &[
        "Agent identifies themselves and the company",
        "No misleading or false statements about products or services",
        "Customer personal data is only requested when necessary",
    ],
    terminology: &["follow-up", "quote", "proposal", "invoice", "account", "service level"],
    common_objections: &[
        "The price is too high",
        "I need to think about it",
        "I need to talk to someone else first",
        "We are happy with our current provider",
    ],
    red_flag_indicators: &[
        "Rude or dismissive language",
        "Making promises the company cannot keep",
        "Ignoring a direct customer question",
        "Pressuring the customer to decide immediately",
    ],
    quality_markers: &[
        "Summarizes the customer's needs back to them",
        "Sets a concrete follow-up date",
        "Uses the customer's name naturally",
    ],
};

pub(super) const BUILTIN_TEMPLATES: &[TemplateDef] = &[
    TemplateDef {
        id: "real_estate",
        display_name: "Real Estate",
        context: "Calls between real estate agents and buyers, sellers, tenants, or landlords about property listings, viewings, offers, and transactions. Trust, local market knowledge, and accurate representation of properties are essential.",
        evaluation_criteria: &[
            "Qualifying the buyer's budget, timeline, and financing",
            "Understanding property requirements (location, size, amenities)",
            "Accurate description of listings",
            "Scheduling viewings or next appointments",
            "Local market knowledge",
            "Handling price negotiations professionally",
        ],
        compliance_requirements: &[
            "Disclose agency relationship and who the agent represents",
            "No discriminatory statements regarding protected characteristics (fair housing)",
            "Disclose known material defects when asked",
            "Do not guarantee future property value appreciation",
        ],
        terminology: &["listing", "MLS", "escrow", "closing costs", "pre-approval", "contingency", "comps", "earnest money", "HOA"],
        common_objections: &[
            "The price is above market value",
            "We want to see more properties first",
            "Interest rates are too high right now",
            "The commission is too high",
        ],
        red_flag_indicators: &[
            "Steering buyers toward or away from neighborhoods based on demographics",
            "Misrepresenting property size, condition, or features",
            "Pressuring a buyer to waive inspection",
            "Promising guaranteed returns on investment",
        ],
        quality_markers: &[
            "Asks about must-have versus nice-to-have features",
            "Provides comparable sales data",
            "Confirms viewing details in writing",
        ],
    },
    TemplateDef {
        id: "insurance",
        display_name: "Insurance",
        context: "Calls about insurance policies (life, health, auto, home, or commercial) covering quotes, coverage explanations, renewals, and claims. Accuracy about coverage, exclusions, and premiums is critical and heavily regulated.",
        evaluation_criteria: &[
            "Needs analysis and coverage assessment",
            "Clear explanation of coverage, exclusions, and deductibles",
            "Accurate premium quotation",
            "Suitability of the recommended policy",
            "Handling of objections about cost",
            "Claims empathy and process clarity",
        ],
        compliance_requirements: &[
            "State licensing and agent identification",
            "Disclose material exclusions and limitations",
            "Obtain consent before recording or collecting health information",
            "Do not misrepresent policy benefits or compare policies misleadingly",
            "Provide the free-look or cooling-off period where applicable",
        ],
        terminology: &["premium", "deductible", "rider", "beneficiary", "underwriting", "exclusion", "copay", "policyholder", "claim", "sum assured"],
        common_objections: &[
            "I already have coverage through work",
            "The premium is too expensive",
            "I'm young and healthy, I don't need it",
            "I don't trust insurance companies to pay out",
        ],
        red_flag_indicators: &[
            "Failing to disclose exclusions",
            "Recommending coverage the customer clearly does not need",
            "Twisting or churning an existing policy",
            "Guaranteeing claim approval",
        ],
        quality_markers: &[
            "Reviews existing coverage before recommending",
            "Explains the deductible with a worked example",
            "Confirms beneficiary details",
        ],
    },
    TemplateDef {
        id: "banking",
        display_name: "Banking & Financial Services",
        context: "Calls with customers about bank accounts, loans, credit cards, investments, or financial advice. Strict regulatory oversight applies; identity verification, suitability, and clear disclosure of fees and risks are mandatory.",
        evaluation_criteria: &[
            "Identity verification before discussing account details",
            "Understanding the customer's financial situation and goals",
            "Clear disclosure of rates, fees, and terms",
            "Suitability of the recommended product",
            "Risk explanation for investment products",
            "Resolution of the customer's request",
        ],
        compliance_requirements: &[
            "Complete identity verification before sharing account information",
            "Disclose APR, fees, and key terms for credit products",
            "Provide risk warnings for investment products",
            "Do not give personalized advice without a suitability assessment",
            "Identify and escalate signs of customer vulnerability",
        ],
        terminology: &["APR", "overdraft", "KYC", "credit score", "amortization", "collateral", "mutual fund", "SIP", "EMI", "interest rate"],
        common_objections: &[
            "The interest rate is too high",
            "Another bank offered a better deal",
            "I'm worried about hidden fees",
            "I don't want a hard credit check",
        ],
        red_flag_indicators: &[
            "Sharing account details before verification",
            "Guaranteeing investment returns",
            "Downplaying fees or penalties",
            "Selling a product without assessing suitability",
        ],
        quality_markers: &[
            "Summarizes total cost of credit",
            "Checks the customer understood the risks",
            "Offers written documentation of terms",
        ],
    },
    TemplateDef {
        id: "healthcare",
        display_name: "Healthcare",
        context: "Calls between healthcare providers, clinics, or health services and patients about appointments, treatments, billing, and follow-up care. Privacy of health information and compassionate communication are paramount.",
        evaluation_criteria: &[
            "Patient identity verification",
            "Empathy and reassurance",
            "Clarity of instructions (preparation, medication, follow-up)",
            "Accurate scheduling and logistics",
            "Appropriate escalation of clinical questions",
            "Billing and insurance clarity",
        ],
        compliance_requirements: &[
            "Verify patient identity before discussing health information",
            "Do not disclose health information to unauthorized third parties",
            "Non-clinical staff must not give medical advice",
            "Direct emergencies to emergency services immediately",
        ],
        terminology: &["appointment", "referral", "prescription", "copay", "prior authorization", "diagnosis", "specialist", "EHR", "telehealth"],
        common_objections: &[
            "The wait time is too long",
            "My insurance won't cover this",
            "I can't afford the treatment",
            "I want a second opinion",
        ],
        red_flag_indicators: &[
            "Discussing health information without verification",
            "Giving clinical advice outside scope",
            "Dismissing symptoms that warrant urgent care",
            "Insensitive language about a patient's condition",
        ],
        quality_markers: &[
            "Repeats back appointment details",
            "Checks the patient's understanding of instructions",
            "Shows empathy for the patient's concerns",
        ],
    },
    TemplateDef {
        id: "automotive",
        display_name: "Automotive",
        context: "Calls with dealerships or automotive service centers about vehicle sales, test drives, trade-ins, financing, and servicing. Transparency on pricing, add-ons, and vehicle history builds trust.",
        evaluation_criteria: &[
            "Understanding vehicle needs and usage",
            "Product knowledge of models and trims",
            "Transparent pricing including fees and add-ons",
            "Trade-in and financing discussion",
            "Booking a test drive or service appointment",
            "Follow-up commitment",
        ],
        compliance_requirements: &[
            "Disclose the total price including mandatory fees",
            "Disclose known vehicle history and accident records",
            "Financing terms must state APR and total repayment",
            "Optional add-ons must be presented as optional",
        ],
        terminology: &["MSRP", "trade-in", "test drive", "extended warranty", "financing", "lease", "trim", "VIN", "on-road price"],
        common_objections: &[
            "I found it cheaper at another dealer",
            "My trade-in is worth more than that",
            "I'm not ready to buy yet",
            "The monthly payment is too high",
        ],
        red_flag_indicators: &[
            "Bundling add-ons without consent",
            "Quoting monthly payment without total cost",
            "Hiding accident or damage history",
            "Bait-and-switch on advertised vehicles",
        ],
        quality_markers: &[
            "Asks about driving habits and family needs",
            "Offers a specific test-drive slot",
            "Provides a written itemized quote",
        ],
    },
    TemplateDef {
        id: "telecom",
        display_name: "Telecommunications",
        context: "Calls about mobile, broadband, TV, or enterprise telecom plans including new connections, upgrades, billing disputes, and technical support. Clear plan comparison and contract terms matter.",
        evaluation_criteria: &[
            "Understanding usage patterns",
            "Plan recommendation fit",
            "Clarity on contract length, fees, and early termination",
            "Technical troubleshooting effectiveness",
            "Billing dispute resolution",
            "Retention handling",
        ],
        compliance_requirements: &[
            "Disclose contract term and early termination fees",
            "Obtain explicit consent before plan changes",
            "Verify account holder before making changes",
            "Do not promise coverage or speeds that cannot be guaranteed",
        ],
        terminology: &["data plan", "roaming", "postpaid", "prepaid", "bandwidth", "port-in", "SIM", "fiber", "early termination fee"],
        common_objections: &[
            "Another carrier is cheaper",
            "Coverage is poor in my area",
            "I don't want a long contract",
            "My bill was higher than expected",
        ],
        red_flag_indicators: &[
            "Changing plans without explicit consent",
            "Misrepresenting network speed or coverage",
            "Hiding activation or termination fees",
            "Refusing a cancellation request",
        ],
        quality_markers: &[
            "Reviews actual usage before recommending",
            "Confirms changes and effective date",
            "Provides a reference number",
        ],
    },
    TemplateDef {
        id: "saas",
        display_name: "Software & SaaS",
        context: "Calls between software vendors and prospects or customers covering discovery, demos, pricing, onboarding, renewals, and support. Consultative selling and accurate capability claims are key.",
        evaluation_criteria: &[
            "Discovery of business pain and current tooling",
            "Identification of decision makers and process",
            "Tailored product demonstration",
            "Accurate capability and roadmap statements",
            "Pricing and ROI articulation",
            "Clear mutual action plan",
        ],
        compliance_requirements: &[
            "Do not commit to unreleased features as contractual",
            "Accurately describe data security and privacy certifications",
            "Disclose auto-renewal terms",
        ],
        terminology: &["ARR", "seat", "onboarding", "integration", "API", "SLA", "churn", "POC", "renewal", "tier"],
        common_objections: &[
            "We already use a competitor",
            "It's not in the budget this quarter",
            "Our team doesn't have time to implement",
            "We need feature X before we can buy",
        ],
        red_flag_indicators: &[
            "Promising roadmap features as available",
            "Overstating security certifications",
            "Ignoring integration requirements raised by the customer",
            "Discounting without qualifying",
        ],
        quality_markers: &[
            "Quantifies the cost of the current problem",
            "Identifies the economic buyer",
            "Agrees a dated next step",
        ],
    },
    TemplateDef {
        id: "education",
        display_name: "Education & EdTech",
        context: "Calls with students, parents, or professionals about courses, admissions, fees, scholarships, and learning outcomes. Honest representation of outcomes and counselling-style guidance are expected.",
        evaluation_criteria: &[
            "Understanding the learner's goals and background",
            "Course or program fit",
            "Transparent fee and scholarship information",
            "Realistic outcome and placement statements",
            "Handling of parental concerns",
            "Enrollment next steps",
        ],
        compliance_requirements: &[
            "Do not guarantee job placement or salary outcomes",
            "Disclose total fees, refund policy, and financing terms",
            "Accreditation claims must be accurate",
        ],
        terminology: &["enrollment", "curriculum", "accreditation", "scholarship", "EMI", "placement", "cohort", "certification", "counsellor"],
        common_objections: &[
            "The course is too expensive",
            "I don't have time to study",
            "I'm not sure this will help my career",
            "I need to discuss with my parents",
        ],
        red_flag_indicators: &[
            "Guaranteeing placements or salaries",
            "Creating false urgency about seat availability",
            "Pushing loans without explaining terms",
            "Misrepresenting accreditation",
        ],
        quality_markers: &[
            "Asks about the learner's current skill level",
            "Shares verifiable alumni outcomes",
            "Explains the refund policy unprompted",
        ],
    },
    TemplateDef {
        id: "hospitality",
        display_name: "Hospitality",
        context: "Calls with hotels, resorts, and restaurants about reservations, events, special requests, and complaints. Warmth, attention to detail, and service recovery define quality.",
        evaluation_criteria: &[
            "Warm, welcoming greeting",
            "Accurate capture of reservation details",
            "Upselling relevant packages or upgrades",
            "Handling special requests",
            "Service recovery for complaints",
            "Confirmation and farewell",
        ],
        compliance_requirements: &[
            "Disclose cancellation and deposit policies",
            "Handle payment card details securely (no reading back full numbers)",
            "Disclose taxes and service charges in quoted prices",
        ],
        terminology: &["reservation", "check-in", "upgrade", "deposit", "cancellation policy", "banquet", "room rate", "occupancy", "concierge"],
        common_objections: &[
            "The room rate is too high",
            "I found a cheaper rate online",
            "The cancellation policy is too strict",
            "I had a bad experience last time",
        ],
        red_flag_indicators: &[
            "Reading full card numbers aloud",
            "Quoting prices without taxes and fees",
            "Arguing with a complaining guest",
            "Failing to confirm booking details",
        ],
        quality_markers: &[
            "Repeats dates and guest count",
            "Offers a relevant upgrade",
            "Apologizes and offers a remedy when something went wrong",
        ],
    },
    TemplateDef {
        id: "retail",
        display_name: "Retail & E-commerce",
        context: "Calls about product inquiries, orders, deliveries, returns, and refunds for retail and online stores. Fast resolution, accurate order information, and friendly service drive satisfaction.",
        evaluation_criteria: &[
            "Order and customer verification",
            "Product knowledge and recommendations",
            "Accurate delivery and stock information",
            "Return and refund handling",
            "Cross-sell and upsell relevance",
            "First-contact resolution",
        ],
        compliance_requirements: &[
            "State return and refund policy accurately",
            "Verify customer identity before sharing order details",
            "Honor advertised prices and promotions",
        ],
        terminology: &["order ID", "SKU", "return window", "refund", "exchange", "tracking number", "COD", "warranty", "backorder"],
        common_objections: &[
            "The delivery takes too long",
            "I want a full refund, not store credit",
            "The product was damaged",
            "It's cheaper elsewhere",
        ],
        red_flag_indicators: &[
            "Refusing a return within policy",
            "Giving false delivery dates",
            "Blaming the customer for a defect",
            "Sharing order details without verification",
        ],
        quality_markers: &[
            "Provides a tracking or reference number",
            "Offers alternatives when out of stock",
            "Confirms resolution timeline",
        ],
    },
    TemplateDef {
        id: "solar",
        display_name: "Solar & Renewable Energy",
        context: "Calls about residential or commercial solar installations, energy audits, financing, subsidies, and maintenance. Savings claims, subsidy eligibility, and installation timelines must be presented honestly.",
        evaluation_criteria: &[
            "Qualifying roof, ownership, and energy usage",
            "Explaining system sizing",
            "Realistic savings and payback calculation",
            "Subsidy and financing explanation",
            "Scheduling a site survey",
            "Handling of installation concerns",
        ],
        compliance_requirements: &[
            "Do not overstate savings or guarantee electricity bill elimination",
            "Disclose subsidy eligibility conditions accurately",
            "Financing must state interest rate and total cost",
            "Disclose warranty terms for panels and inverters",
        ],
        terminology: &["kW", "kWh", "net metering", "inverter", "payback period", "subsidy", "site survey", "on-grid", "rooftop"],
        common_objections: &[
            "The upfront cost is too high",
            "I might move house in a few years",
            "My roof isn't suitable",
            "I don't believe the savings numbers",
        ],
        red_flag_indicators: &[
            "Guaranteeing zero electricity bills",
            "Claiming subsidies the customer does not qualify for",
            "Pressuring with expiring-today offers",
            "Skipping the site survey",
        ],
        quality_markers: &[
            "Asks for recent electricity bills",
            "Explains payback period with numbers",
            "Books a specific site survey slot",
        ],
    },
    TemplateDef {
        id: "legal",
        display_name: "Legal Services",
        context: "Calls between law firms or legal service providers and prospective or existing clients about case intake, consultations, fees, and case updates. Confidentiality and avoiding unauthorized legal advice are essential.",
        evaluation_criteria: &[
            "Conflict check and intake completeness",
            "Understanding the client's legal issue",
            "Clear explanation of fee structure",
            "Setting expectations on process and timeline",
            "Confidentiality and professionalism",
            "Booking a consultation",
        ],
        compliance_requirements: &[
            "Non-attorneys must not give legal advice",
            "Do not guarantee case outcomes",
            "Explain fee arrangement (hourly, contingency, flat fee)",
            "Maintain client confidentiality",
        ],
        terminology: &["retainer", "contingency fee", "consultation", "statute of limitations", "litigation", "settlement", "affidavit", "jurisdiction"],
        common_objections: &[
            "Lawyers are too expensive",
            "I'm not sure I have a case",
            "I want to try to settle on my own first",
            "Another firm offered a free consultation",
        ],
        red_flag_indicators: &[
            "Guaranteeing a case outcome",
            "Giving legal advice without attorney review",
            "Discussing other clients' matters",
            "Ignoring statute of limitations concerns",
        ],
        quality_markers: &[
            "Captures key dates and parties",
            "Explains next steps in the process",
            "Confirms confidentiality",
        ],
    },
    TemplateDef {
        id: "recruitment",
        display_name: "Recruitment & Staffing",
        context: "Calls between recruiters and candidates or hiring managers covering role briefs, screening, offers, and placements. Accurate role representation and fair, non-discriminatory screening are required.",
        evaluation_criteria: &[
            "Understanding candidate experience and motivations",
            "Accurate role and compensation description",
            "Structured screening questions",
            "Candidate experience and respect",
            "Managing expectations on process and timelines",
            "Clear next steps",
        ],
        compliance_requirements: &[
            "No questions about protected characteristics (age, religion, marital status, etc.)",
            "Obtain consent before sharing a candidate's profile with clients",
            "Represent compensation and role accurately",
        ],
        terminology: &["CTC", "notice period", "job description", "shortlist", "offer letter", "background check", "placement fee", "interview loop"],
        common_objections: &[
            "The salary is below my expectation",
            "I'm not actively looking",
            "The notice period is too long",
            "I have another offer",
        ],
        red_flag_indicators: &[
            "Asking discriminatory questions",
            "Submitting a candidate without consent",
            "Misrepresenting the role or salary",
            "Pressuring a candidate to accept immediately",
        ],
        quality_markers: &[
            "Asks about career goals, not just skills",
            "Confirms salary expectations explicitly",
            "Gives a timeline for feedback",
        ],
    },
    TemplateDef {
        id: "travel",
        display_name: "Travel & Tourism",
        context: "Calls with travel agencies, airlines, or tour operators about bookings, itineraries, changes, cancellations, and visas. Accurate fares, fare rules, and travel requirements are critical.",
        evaluation_criteria: &[
            "Understanding travel dates, party size, and preferences",
            "Itinerary recommendation quality",
            "Fare rule and change fee clarity",
            "Visa and documentation guidance",
            "Handling disruptions and complaints",
            "Booking confirmation",
        ],
        compliance_requirements: &[
            "Disclose fare rules, change fees, and cancellation penalties",
            "Quote prices inclusive of taxes and surcharges",
            "Advise travelers to verify visa requirements with official sources",
        ],
        terminology: &["PNR", "itinerary", "layover", "fare class", "refundable", "visa", "travel insurance", "package", "check-in baggage"],
        common_objections: &[
            "I found a cheaper fare online",
            "The cancellation penalty is too high",
            "I'm not sure about my dates yet",
            "The hotel reviews are bad",
        ],
        red_flag_indicators: &[
            "Quoting fares without taxes",
            "Hiding non-refundable conditions",
            "Giving definitive visa advice without caveats",
            "Booking without confirming traveler names",
        ],
        quality_markers: &[
            "Spells back traveler names",
            "Explains fare rules before booking",
            "Suggests travel insurance where relevant",
        ],
    },
];
