//! Static catalog fixture.

pub(super) const VITALS: [&str; 50] = [
    "Amlodipine 5mg",
    "Bisoprolol 5mg",
    "Captopril 25mg",
    "Enalapril 10mg",
    "Lisinopril 10mg",
    "Valsartan 80mg",
    "Losartan 50mg",
    "Hydrochlorothiazide 25mg",
    "Spironolactone 25mg",
    "Furosemide 40mg",
    "Atorvastatin 20mg",
    "Rosuvastatin 10mg",
    "Simvastatin 20mg",
    "Clopidogrel 75mg",
    "Aspirin 81mg",
    "Warfarin 5mg",
    "Apixaban 5mg",
    "Rivaroxaban 10mg",
    "Metformin 850mg",
    "Gliclazide MR 60mg",
    "Sitagliptin 100mg",
    "Empagliflozin 10mg",
    "Dapagliflozin 10mg",
    "Insulin Glargine Vial",
    "Insulin Aspart Vial",
    "Omeprazole 20mg",
    "Pantoprazole 40mg",
    "Esomeprazole 40mg",
    "Rabeprazole 20mg",
    "Amoxicillin/Clavulanate 1g",
    "Azithromycin 500mg",
    "Cefixime 400mg",
    "Ceftriaxone 1g Vial",
    "Ciprofloxacin 500mg",
    "Levofloxacin 500mg",
    "Doxycycline 100mg",
    "Paracetamol 500mg",
    "Ibuprofen 400mg",
    "Diclofenac Potassium 50mg",
    "Ketoprofen 75mg",
    "Mefenamic Acid 500mg",
    "Tramadol 50mg",
    "Prednisone 20mg",
    "Hydrocortisone 100mg Amp",
    "Salbutamol Inhaler",
    "Budesonide/Formoterol Inhaler",
    "Montelukast 10mg",
    "Cetirizine 10mg",
    "Loratadine 10mg",
    "Fexofenadine 180mg",
];

pub(super) const VITAMINS: [&str; 50] = [
    "Vitamin C 1000mg",
    "Vitamin D3 5000 IU",
    "Vitamin B-Complex",
    "Vitamin B12 1000mcg",
    "Folic Acid 5mg",
    "Iron (Ferrous Fumarate)",
    "Calcium + Vitamin D",
    "Magnesium Glycinate",
    "Zinc 50mg",
    "Selenium 200mcg",
    "Omega-3 Fish Oil",
    "Multivitamin Adult",
    "Prenatal Multivitamin",
    "Biotin 10mg",
    "Vitamin E 400IU",
    "Collagen Peptides",
    "Probiotic 10B CFU",
    "Lutein + Zeaxanthin",
    "CoQ10 100mg",
    "Glucosamine + Chondroitin",
    "Garlic Oil Capsules",
    "Evening Primrose Oil",
    "Royal Jelly 1000mg",
    "Spirulina Tablets",
    "Korean Ginseng",
    "Milk Thistle",
    "Cranberry Extract",
    "Ashwagandha 500mg",
    "Melatonin 5mg",
    "Vitamin K2 + D3",
    "Chromium Picolinate",
    "Potassium Gluconate",
    "ORS Electrolyte Sachets",
    "Vitamin A 5000 IU",
    "Niacin (B3)",
    "Riboflavin (B2)",
    "Thiamine (B1)",
    "Pyridoxine (B6)",
    "Methylfolate",
    "Cyanocobalamin",
    "Inositol",
    "MSM (Methylsulfonylmethane)",
    "Green Tea Extract",
    "Turmeric Curcumin",
    "Saw Palmetto",
    "Ginkgo Biloba",
    "Iron + Vitamin C",
    "Zinc + Vitamin C",
    "Propolis Capsules",
    "Bone Support Complex",
];

pub(super) const FITNESS: [&str; 50] = [
    "Whey Protein Concentrate",
    "Whey Protein Isolate",
    "Hydrolyzed Whey",
    "Casein Protein",
    "Mass Gainer",
    "BCAA 2:1:1",
    "EAA Blend",
    "Creatine Monohydrate",
    "Creatine HCl",
    "Beta-Alanine",
    "Citrulline Malate",
    "L-Arginine",
    "L-Carnitine",
    "CLA Softgels",
    "HMB 3g",
    "Glutamine Powder",
    "Pre-Workout (Stim)",
    "Pre-Workout (Non-Stim)",
    "Electrolyte Tablets",
    "Isotonic Drink Powder",
    "Carb Powder (Maltodextrin)",
    "Energy Gel",
    "Caffeine 200mg",
    "Green Coffee Capsules",
    "MCT Oil",
    "Psyllium Husk",
    "Joint Support (Collagen)",
    "Recovery Shake",
    "Nitric Oxide Booster",
    "ZMA (Zinc Magnesium B6)",
    "Betaine Anhydrous",
    "Taurine 1000mg",
    "Beta-Glucan",
    "Beetroot Powder",
    "Hydration Tabs",
    "Fasted Cardio Burner",
    "Protein Cookies",
    "Protein Bars",
    "Electrolyte Gummies",
    "Electrolyte Effervescent",
    "BCAA RTD Drink",
    "Protein RTD Drink",
    "Carb/Electrolyte Sachet",
    "Immune Support for Athletes",
    "Sleep Support for Athletes",
    "Digestive Enzymes",
    "Antioxidant Blend",
    "Omega-3 Sport",
    "Multivitamin Sport",
    "Collagen + Vitamin C Sport",
];

pub(super) const COSMETICS: [&str; 50] = [
    "Adapalene Gel 0.1%",
    "Tretinoin Cream 0.05%",
    "Benzoyl Peroxide Gel 5%",
    "Clindamycin Gel 1%",
    "Erythromycin Topical 2%",
    "Fusidic Acid Cream 2%",
    "Mupirocin Ointment 2%",
    "Hydrocortisone Cream 1%",
    "Betamethasone Cream 0.1%",
    "Clotrimazole Cream 1%",
    "Terbinafine Cream 1%",
    "Ketoconazole Cream 2%",
    "Ketoconazole Shampoo 2%",
    "Selenium Sulfide Shampoo 2.5%",
    "Coal Tar Shampoo",
    "Salicylic Acid Cleanser 2%",
    "Urea Cream 10%",
    "Ceramide Moisturizing Cream",
    "Hyaluronic Acid Serum",
    "Niacinamide Serum 10%",
    "Vitamin C Serum 15%",
    "Sunscreen SPF50",
    "Panthenol Cream",
    "Zinc Oxide Cream",
    "Calamine Lotion",
    "Emollient Ointment",
    "AHA/BHA Toner",
    "Azelaic Acid Gel 15%",
    "Silver Sulfadiazine Cream 1%",
    "Antifungal Powder (Miconazole)",
    "Tolnaftate Spray",
    "Nystatin Cream",
    "Sulfur Soap",
    "Barrier Repair Cream",
    "Medicated Lip Balm",
    "Acyclovir Cream 5%",
    "Ciclopirox Nail Lacquer",
    "Minoxidil 5% Topical",
    "Hair Serum Biotin",
    "Anti-Dandruff Lotion (Pyrithione Zinc)",
    "Lice Treatment Lotion",
    "Moisturizing Eye Cream",
    "Retinol Night Cream 0.3%",
    "Lactic Acid Lotion 12%",
    "Pramoxine Anti-Itch Lotion",
    "Hydrating Foot Cream",
    "Hand Cream with Urea",
    "Antiperspirant Roll-On Clinical",
    "Antiseptic Skin Spray (Chlorhexidine)",
    "Nasal Saline Spray",
];
