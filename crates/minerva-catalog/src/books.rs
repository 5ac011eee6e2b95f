//! Built-in digital library catalog

use crate::{Book, BOOK_PRICE_ETH};

/// The shipped book list
pub fn builtin_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "Web3 Fundamentals and AI".into(),
            author: "Dr. Sarah Chen".into(),
            cover_image: "/images/web3-ai.jpg".into(),
            description: "Learn the fundamentals of Web3 technology and artificial intelligence in this comprehensive guide.".into(),
            is_paid: false,
            price: 0.0,
            pdf_url: "https://bafkreictq2jdk2z2v3ytcmhhe5bw6pvjbtafaxdim3qban4wwgvbw3q3vm.ipfs.flk-ipfs.xyz".into(),
            is_audio: false,
        },
        Book {
            id: 2,
            title: "Rise Above All".into(),
            author: "Michael J. Thompson".into(),
            cover_image: "/images/rise-above.jpg".into(),
            description: "A guide to personal development and achieving your goals through self-motivation.".into(),
            is_paid: false,
            price: 0.0,
            pdf_url: "https://bafkreifcwxjcjo2t6vm3t5oh2pysheolwn65qip7hhbi4dl4jqhuezlbru.ipfs.flk-ipfs.xyz".into(),
            is_audio: false,
        },
        Book {
            id: 3,
            title: "Introduction to Blockchain".into(),
            author: "Prof. Alex Rivera".into(),
            cover_image: "/images/blockchain-intro.jpg".into(),
            description: "Discover the fundamentals of blockchain technology and its applications.".into(),
            is_paid: true,
            price: BOOK_PRICE_ETH,
            pdf_url: "https://bafkreibouwloe52wmdse4qiq3wkmumdx36hxqrmohrsyte5vgvjthjf5pu.ipfs.flk-ipfs.xyz".into(),
            is_audio: false,
        },
        Book {
            id: 4,
            title: "Understanding AI Networks".into(),
            author: "Dr. Emily Watson".into(),
            cover_image: "/images/ai-networks.jpg".into(),
            description: "An in-depth look at artificial intelligence networks and their implementation.".into(),
            is_paid: true,
            price: BOOK_PRICE_ETH,
            pdf_url: "https://bafkreifjzdc7xmsxqic7ra6ydm3y65ypbe4e2t7rrv7mwnqamsnb3ozqja.ipfs.flk-ipfs.xyz".into(),
            is_audio: false,
        },
        Book {
            id: 5,
            title: "Realizing the Truth of Self".into(),
            author: "Maya Patel".into(),
            cover_image: "/images/truth-self.jpg".into(),
            description: "An audio journey into self-discovery and personal truth.".into(),
            is_paid: false,
            price: 0.0,
            pdf_url: "https://bafybeifyk7cbl65e3zdajt2wht4egujqgp5rc46f5jeghqlifvwjd55dhu.ipfs.flk-ipfs.xyz".into(),
            is_audio: true,
        },
        Book {
            id: 6,
            title: "History of World".into(),
            author: "Prof. David Anderson".into(),
            cover_image: "/images/world-history.jpg".into(),
            description: "An audio exploration of world history and its major events.".into(),
            is_paid: false,
            price: 0.0,
            pdf_url: "https://bafybeifyk7cbl65e3zdajt2wht4egujqgp5rc46f5jeghqlifvwjd55dhu.ipfs.flk-ipfs.xyz".into(),
            is_audio: true,
        },
    ]
}
